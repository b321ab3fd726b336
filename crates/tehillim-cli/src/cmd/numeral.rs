use crate::output::print_json;
use tehillim_core::numeral::to_hebrew_numeral;

pub fn run(number: u32, json: bool) -> anyhow::Result<()> {
    let numeral = to_hebrew_numeral(number);
    if numeral.is_empty() {
        anyhow::bail!("{number} has no Hebrew numeral form (supported: 1-499)");
    }
    if json {
        print_json(&serde_json::json!({ "number": number, "numeral": numeral }))?;
    } else {
        println!("{numeral}");
    }
    Ok(())
}
