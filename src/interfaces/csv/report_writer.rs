use crate::domain::coin_stack::CoinStack;
use crate::domain::inventory::Inventory;
use crate::error::Result;
use std::io::Write;

/// Writes the machine's final state as CSV sections: the coin float
/// (`denomination,count`) and the product stock (`name,price,count`).
pub struct ReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_float(&mut self, coin_stack: &CoinStack) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.sink);
        for coin in coin_stack.coins() {
            writer.serialize(coin)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_stock(&mut self, inventory: &Inventory) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.sink);
        for product in inventory.products() {
            writer.serialize(product)?;
        }
        writer.flush()?;
        Ok(())
    }
}
