//! filter - Apply one image filter to a 24-bit BMP file

use std::process::ExitCode;

fn main() -> ExitCode {
    bmpfilter::cli::run()
}
