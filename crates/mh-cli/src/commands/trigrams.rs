use comfy_table::{ContentArrangement, Table};

use mh_core::line::bits;
use mh_core::trigram::TRIGRAMS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Trigram", "Symbol", "Nature", "Lines (bottom→top)"]);

    for t in &TRIGRAMS {
        let lines: Vec<String> = bits(&t.lines).iter().map(u8::to_string).collect();
        table.add_row(vec![
            t.id.to_string(),
            t.name.to_string(),
            t.symbol.to_string(),
            t.nature.to_string(),
            lines.join(" "),
        ]);
    }

    println!("{table}");
    Ok(())
}
