use anyhow::{Context, Result};
use console::{style, Emoji};
use rand::Rng;
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};

use crate::{
    cli::{
        args::{Args, ReceiptFormat},
        prompt::{LinePrompter, Prompter, TerminalPrompter},
    },
    models::{Catalog, Decoration},
    services::{delivery_rng, CheckoutOutcome, MenuSelection, ShopSession},
    utils::{
        formatting::{
            format_banner, format_cart, format_catalog_table, format_checkout_summary,
            format_price, format_receipt, separator,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static GIFT: Emoji<'_, '_> = Emoji("🎁 ", "");

const WELCOME: &str = "Welcome to our store!";

/// Drives one customer's visit from welcome to checkout.
pub struct ShopApp<P, R, W> {
    session: ShopSession,
    prompter: P,
    rng: R,
    out: W,
    receipt_format: ReceiptFormat,
}

impl<P: Prompter, R: Rng, W: Write> ShopApp<P, R, W> {
    pub fn new(
        session: ShopSession,
        prompter: P,
        rng: R,
        out: W,
        receipt_format: ReceiptFormat,
    ) -> Self {
        Self {
            session,
            prompter,
            rng,
            out,
            receipt_format,
        }
    }

    pub fn session(&self) -> &ShopSession {
        &self.session
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", format_banner(WELCOME))?;
        self.show_catalog()?;

        loop {
            writeln!(self.out, "{}", separator())?;
            writeln!(
                self.out,
                "Enter the number of the product to add to cart (Press 0 to finish - Press 9 to see your shopping cart):"
            )?;

            match self.read_selection()? {
                MenuSelection::Checkout => break,
                MenuSelection::ViewCart => {
                    writeln!(self.out, "{}", format_cart(self.session.cart()))?;
                }
                MenuSelection::Product(position) => self.handle_product(position)?,
            }
        }

        self.checkout()
    }

    fn show_catalog(&mut self) -> Result<()> {
        writeln!(self.out, "{}", format_catalog_table(self.session.catalog()))?;
        Ok(())
    }

    fn read_selection(&mut self) -> Result<MenuSelection> {
        loop {
            let answer = match self.prompter.ask("Selection")? {
                Some(answer) => answer,
                None => {
                    info!("Input closed at the main menu, checking out");
                    return Ok(MenuSelection::Checkout);
                }
            };

            let number = match parse_number(&answer) {
                Some(number) => number,
                None => {
                    self.report_invalid(&answer, "Please enter a number")?;
                    continue;
                }
            };

            match self.session.select(number) {
                Ok(selection) => return Ok(selection),
                Err(e) => self.report_invalid(&answer, &e.to_string())?,
            }
        }
    }

    fn read_decoration(&mut self) -> Result<Option<Decoration>> {
        loop {
            let answer = match self.prompter.ask("Decoration")? {
                Some(answer) => answer,
                None => return Ok(None),
            };

            match parse_number(&answer) {
                Some(number) => return Ok(Decoration::from_menu_choice(number)),
                None => self.report_invalid(
                    &answer,
                    &format!("Please enter a number between 1 and {}", Decoration::ALL.len() + 1),
                )?,
            }
        }
    }

    fn report_invalid(&mut self, answer: &str, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", CROSS, style(message).red())?;
        warn!("Rejected input '{}': {}", answer, message);
        Ok(())
    }

    fn handle_product(&mut self, position: usize) -> Result<()> {
        let product = self.session.product(position)?;

        writeln!(self.out, "You have chosen: {}", style(product.name()).green())?;
        writeln!(self.out, "Choose decoration for the product:")?;
        for (i, decoration) in Decoration::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, decoration.menu_label())?;
        }
        writeln!(self.out, "{}. No Decoration", Decoration::ALL.len() + 1)?;

        let decoration = self.read_decoration()?;
        match decoration {
            Some(decoration) => writeln!(
                self.out,
                "{} You have applied: {}",
                CHECKMARK,
                style(decoration.label()).cyan()
            )?,
            None => writeln!(self.out, "No decoration applied.")?,
        }

        let item = self.session.purchase(product, decoration);
        writeln!(
            self.out,
            "The new price of the product is: {}\n",
            format_price(item.price())
        )?;
        writeln!(
            self.out,
            "Current total price of your cart: {}\n",
            format_price(self.session.cart().total())
        )?;
        writeln!(self.out, "{}", separator())?;
        self.show_catalog()
    }

    fn checkout(&mut self) -> Result<()> {
        match self.session.checkout(&mut self.rng) {
            CheckoutOutcome::Farewell => {
                writeln!(self.out, "\nSee you again, take care!")?;
            }
            CheckoutOutcome::Completed(receipt) => match self.receipt_format {
                ReceiptFormat::Text => {
                    writeln!(self.out, "\n{}{}", GIFT, format_receipt(&receipt))?;
                }
                ReceiptFormat::Json => {
                    writeln!(self.out, "\n{}{}\n", GIFT, format_checkout_summary(&receipt))?;
                    let json = serde_json::to_string_pretty(&receipt)
                        .context("Failed to serialize receipt")?;
                    writeln!(self.out, "{}", json)?;
                }
            },
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}

fn parse_number(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        info!(
            "Opening shop in {} environment (receipt format: {})",
            self.config.environment, args.receipt
        );

        let catalog = Catalog::standard().context("Failed to build the product catalog")?;
        let session = ShopSession::new(catalog);
        let rng = delivery_rng(args.seed.or(self.config.delivery_seed));
        let out = io::stdout().lock();

        if io::stdin().is_terminal() && console::user_attended_stderr() {
            ShopApp::new(session, TerminalPrompter::new(), rng, out, args.receipt).run()
        } else {
            let input = LinePrompter::new(io::stdin().lock());
            ShopApp::new(session, input, rng, out, args.receipt).run()
        }
    }
}
