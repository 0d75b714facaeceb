//! Check-number command - phone number validation

use clap::Args;

use crate::domain::validate_phone_number;

/// Arguments for the check-number command
#[derive(Args, Clone)]
pub struct CheckNumberArgs {
    /// Phone number such as 040-123456
    pub number: String,
}

/// Print whether the number is valid; invalid numbers fail the command
pub fn run(args: CheckNumberArgs) -> anyhow::Result<()> {
    super::bootstrap();

    validate_phone_number(&args.number)?;
    println!("{} is a valid phone number", args.number);
    Ok(())
}
