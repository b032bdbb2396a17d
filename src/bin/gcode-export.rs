use anyhow::Result;
use gcode_marshal::export::run;

fn main() -> Result<()> {
    run()
}
