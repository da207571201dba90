use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};
use tripwire_app::views;

#[derive(Args)]
pub struct RenderProfileCommand {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub bio: String,
}

pub fn execute(cmd: RenderProfileCommand) -> Result<()> {
    let mut user = Map::new();
    user.insert("name".to_string(), Value::String(cmd.name));
    user.insert("bio".to_string(), Value::String(cmd.bio));

    println!("{}", views::render_profile(&user)?);
    Ok(())
}
