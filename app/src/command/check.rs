//! One-off roster lookup from the command line.

use paperscout_config::Config;
use paperscout_core::lookup;

pub fn run(config: &Config, name: &str) -> anyhow::Result<()> {
    let roster = super::load_roster(config)?;

    match lookup(name, &roster) {
        Some(m) => {
            println!(
                "score {} ({:?}, rule '{}')",
                m.confidence.score(),
                m.confidence,
                m.rule
            );
            println!("matched member: {}", m.entry.display);
        }
        None => println!("score 0: no roster member matches {name:?}"),
    }
    Ok(())
}
