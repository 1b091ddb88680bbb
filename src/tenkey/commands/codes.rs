use crate::area_codes::AreaCodeTable;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(table: &AreaCodeTable) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_area_codes(table.entries().to_vec());
    if table.is_fallback() {
        result.add_message(CmdMessage::info(
            "Area code file not loaded, showing the built-in table",
        ));
    }
    Ok(result)
}
