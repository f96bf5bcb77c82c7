//! # `sbf validate` — verify a barcode's checksums

use sbf_core::SangerBarcode;

/// Arguments for the `validate` subcommand.
#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// A barcode in any format.
    pub input: String,

    /// Require the human form to carry its checksum letter.
    #[arg(long)]
    pub checksum_required: bool,
}

/// Exit zero when the barcode verifies, non-zero otherwise.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    tracing::debug!(input = %args.input, "validating barcode");

    if args.checksum_required {
        // Surfaces the missing-checksum case as its own diagnostic
        // before the general validity check.
        SangerBarcode::from_human_requiring_checksum(&args.input)?;
    }

    let barcode = SangerBarcode::from_user_input(&args.input);
    if !barcode.valid() {
        anyhow::bail!("invalid: {:?} does not verify", args.input);
    }
    println!("valid: {barcode}");
    Ok(())
}
