use comfy_table::{ContentArrangement, Table};

use mh_core::grid::hexagram_name;
use mh_core::trigram::TRIGRAMS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["上＼下".to_string()];
    header.extend(TRIGRAMS.iter().map(|t| format!("{}{}", t.name, t.symbol)));
    table.set_header(header);

    for upper in &TRIGRAMS {
        let mut row = vec![format!("{}{}", upper.name, upper.symbol)];
        for lower in &TRIGRAMS {
            let name = hexagram_name(upper.id, lower.id)
                .ok_or_else(|| format!("no grid entry for {}/{}", upper.id, lower.id))?;
            row.push(name);
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  64 hexagrams, rows: upper trigram, columns: lower trigram");
    Ok(())
}
