use anyhow::Result;
use clap::Args;
use tripwire_app::Product;

#[derive(Args)]
pub struct DiscountCommand {
    /// Starting price
    pub price: f64,

    /// Discount percentage, not range checked
    #[arg(allow_hyphen_values = true)]
    pub percent: f64,

    /// Product name shown in the output
    #[arg(long, default_value = "Widget")]
    pub name: String,
}

pub fn execute(cmd: DiscountCommand) -> Result<()> {
    let mut product = Product::new(cmd.name, cmd.price);
    product.apply_discount(cmd.percent);

    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}
