use anyhow::Result;

fn main() -> Result<()> {
    roadmap_cli::main_entry()
}
