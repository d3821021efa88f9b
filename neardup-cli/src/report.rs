//! Console report of a comparison run.
use neardup::{Collection, Comparison};

/// Renders the fingerprints of usable documents and the comparison of each pair.
pub fn render(collection: &Collection, results: &[(usize, usize, Comparison)]) -> String {
    let documents = collection.documents();
    let mut out = String::new();
    for doc in documents {
        out.push_str(&format!("Simhash of {}: {}\n", doc.label, doc.fingerprint));
    }
    for &(i, j, c) in results {
        out.push_str(&format!(
            "\nDistance between {} and {}: {}\n",
            documents[i].label, documents[j].label, c.distance
        ));
        out.push_str(&format!("Similarity percentage: {:.2}%\n", c.similarity));
        out.push_str(&format!("Relationship: {}\n", c.relationship));
    }
    out
}
