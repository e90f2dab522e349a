use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use vidscout_config::PathManager;
use vidscout_core::LedgerStore;
use vidscout_models::VideoClass;

fn open_store() -> Result<LedgerStore> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    paths.ensure_directories().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let store = LedgerStore::new(paths.history_file());
    store.initialize().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    Ok(store)
}

pub fn run_show(output: &Output) -> Result<()> {
    let store = open_store()?;
    let ledger = store.read();

    match output.format() {
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&ledger)?);
        }
        OutputFormat::Human => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Class", "Video"]);
            for name in &ledger.short_videos {
                table.add_row(vec!["short", name.as_str()]);
            }
            for name in &ledger.long_videos {
                table.add_row(vec!["long", name.as_str()]);
            }
            if ledger.short_videos.is_empty() && ledger.long_videos.is_empty() {
                output.info("No videos recorded yet.");
            } else {
                output.info(format!("{}", table));
            }
            output.info(format!("Total points: {}", ledger.points));
        }
    }
    Ok(())
}

pub fn run_record(class: VideoClass, name: &str, output: &Output) -> Result<()> {
    let store = open_store()?;
    let points = store
        .record(class, name)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    output.success(format!("Recorded {} video '{}' (+{} points)", class, name, points));
    Ok(())
}

pub fn run_reset_points(output: &Output) -> Result<()> {
    let store = open_store()?;
    store
        .reset_points()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    output.success("Ledger points reset to 0");
    Ok(())
}
