use crate::export;

/// List all registered export formats
pub fn list_formats() {
    println!();
    println!("scanexport — Available Export Formats");
    println!("{}", "━".repeat(55));
    println!();

    let exporters = export::all_exporters();

    for exporter in exporters {
        println!("  {:<8} {}", exporter.name(), exporter.description());
    }

    println!();
    println!("{}", "━".repeat(55));
    println!("  {} formats available", exporters.len());
    println!();
    println!("  Run `scanexport export results.json -f csv,json` to export");
    println!();
}
