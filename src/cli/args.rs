use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "gift-shop")]
#[command(about = "An interactive gift shop: pick products, add extras, check out")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed for the delivery estimate (overrides SHOP_DELIVERY_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Receipt format printed at checkout
    #[arg(long, default_value = "text")]
    pub receipt: ReceiptFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReceiptFormat {
    Text,
    Json,
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptFormat::Text => write!(f, "text"),
            ReceiptFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gift-shop"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.seed, None);
        assert_eq!(args.receipt, ReceiptFormat::Text);
    }

    #[test]
    fn test_flags() {
        let args =
            Args::try_parse_from(["gift-shop", "-v", "--seed", "17", "--receipt", "json"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.seed, Some(17));
        assert_eq!(args.receipt, ReceiptFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_receipt_format() {
        assert!(Args::try_parse_from(["gift-shop", "--receipt", "xml"]).is_err());
    }
}
