#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = folio_ui::run() {
        eprintln!("Folio failed: {err}");
        std::process::exit(1);
    }
}
