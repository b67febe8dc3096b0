use crate::templates::all_templates;
use anyhow::Result;
use comfy_table::Table;

pub fn list_templates(json: bool) -> Result<()> {
    let templates = all_templates();

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Name",
        "Fields",
        "Default margin",
        "Default horizon",
    ]);
    for template in &templates {
        table.add_row(vec![
            template.id.id().to_string(),
            template.name.to_string(),
            template
                .inputs
                .iter()
                .map(|f| f.id)
                .collect::<Vec<_>>()
                .join(", "),
            format!("{}%", template.assumptions_defaults.gross_margin),
            format!("{} months", template.assumptions_defaults.horizon),
        ]);
    }
    println!("{table}");

    Ok(())
}
