use crate::core::tips;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle() -> AppResult<()> {
    header("Wellness tips during pregnancy");
    print!("{}", tips::render(72));
    Ok(())
}
