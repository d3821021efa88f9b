use neardup::{Collector, Document, Fingerprinter};

fn main() {
    let documents = vec![
        Document::new(
            "jimbocho-v1",
            "<head><title>Town guide</title></head>\
             <header>Menu | Shops | Access</header>\
             <p>Welcome to Jimbocho, the town of books and curry!</p>\
             <footer>2023</footer>",
        ),
        Document::new(
            "jimbocho-v2",
            "<head><title>Town guide (updated)</title></head>\
             <header>Menu | Shops | Events | Access</header>\
             <p>Welcome to Jimbocho, the town of books and curry!</p>\
             <footer>2024</footer>",
        ),
        Document::new(
            "jimbocho-city",
            "<p>Welcome to Jimbocho, the city of books and curry!</p>",
        ),
        Document::new(
            "weather",
            "<p>Heavy rain is expected across the Kanto region tomorrow morning.</p>",
        ),
    ];

    // Creates a fingerprinter with seed value 42.
    let fingerprinter = Fingerprinter::new(Some(42));
    let collection = Collector::new(&fingerprinter).collect_documents(documents, vec![]);

    for doc in collection.documents() {
        println!("Simhash of {}: {}", doc.label, doc.fingerprint);
    }
    for (i, j, c) in collection.compare_all().unwrap() {
        println!(
            "{} vs {}: distance={}, similarity={:.2}%, {}",
            collection.documents()[i].label,
            collection.documents()[j].label,
            c.distance,
            c.similarity,
            c.relationship
        );
    }
}
