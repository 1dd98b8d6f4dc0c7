//! Interactive session
//!
//! A line-oriented session over any `BufRead`/`Write` pair. Categories
//! live in memory for the lifetime of the session and are discarded when
//! it ends. Validation errors print as `error: ...`; insufficient-funds
//! declines print as `Declined: ...` and leave the ledgers untouched.

use std::io::{self, BufRead, Write};

use crate::chart::create_spend_chart;
use crate::display::format_category_summary;
use crate::error::BudgetError;
use crate::export::{export_snapshot_json, export_transactions_csv};
use crate::models::{Category, Money};

const HELP: &str = "Commands:
  create <name>                           create a category
  deposit <name> <amount> [description]   add funds
  withdraw <name> <amount> [description]  spend funds
  transfer <from> <to> <amount>           move funds between categories
  balance <name>                          show the current balance
  check <name> <amount>                   test whether funds cover an amount
  report <name>                           print the ledger report
  summary                                 print the balance and spending table
  chart                                   print the spend chart
  export [json|csv]                       print the ledgers as JSON or CSV
  help                                    show this help
  quit                                    end the session

Category names are single words in the session.";

/// Run a session over stdin and stdout
pub fn run_session_stdio() -> io::Result<()> {
    run_session(io::stdin().lock(), &mut io::stdout().lock())
}

/// Run a session over the given reader and writer
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut categories: Vec<Category> = Vec::new();

    writeln!(output, "spendbook session. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if !dispatch(&mut categories, &tokens, output)? {
            break;
        }
    }

    Ok(())
}

/// Handle one command line. Returns `Ok(false)` when the session ends.
fn dispatch<W: Write>(
    categories: &mut Vec<Category>,
    tokens: &[&str],
    out: &mut W,
) -> io::Result<bool> {
    match tokens {
        ["create", name] => create(categories, name, out)?,
        ["create", ..] => usage(out, "create <name>")?,
        ["deposit", name, amount, rest @ ..] => {
            deposit(categories, name, amount, &rest.join(" "), out)?
        }
        ["deposit", ..] => usage(out, "deposit <name> <amount> [description]")?,
        ["withdraw", name, amount, rest @ ..] => {
            withdraw(categories, name, amount, &rest.join(" "), out)?
        }
        ["withdraw", ..] => usage(out, "withdraw <name> <amount> [description]")?,
        ["transfer", from, to, amount] => transfer(categories, from, to, amount, out)?,
        ["transfer", ..] => usage(out, "transfer <from> <to> <amount>")?,
        ["balance", name] => balance(categories, name, out)?,
        ["balance", ..] => usage(out, "balance <name>")?,
        ["check", name, amount] => check(categories, name, amount, out)?,
        ["check", ..] => usage(out, "check <name> <amount>")?,
        ["report", name] => report(categories, name, out)?,
        ["report", ..] => usage(out, "report <name>")?,
        ["summary"] => write!(out, "{}", format_category_summary(categories))?,
        ["chart"] => writeln!(out, "{}", create_spend_chart(categories))?,
        ["export"] => export(categories, "json", out)?,
        ["export", format] => export(categories, format, out)?,
        ["export", ..] => usage(out, "export [json|csv]")?,
        ["help"] => writeln!(out, "{}", HELP)?,
        ["quit"] | ["exit"] => return Ok(false),
        [other, ..] => writeln!(out, "Unknown command: {}. Type 'help' for commands.", other)?,
        [] => {}
    }
    Ok(true)
}

fn usage<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "usage: {}", text)
}

fn create<W: Write>(categories: &mut Vec<Category>, name: &str, out: &mut W) -> io::Result<()> {
    if categories.iter().any(|c| c.name() == name) {
        return writeln!(out, "error: category already exists: {}", name);
    }
    match Category::new(name) {
        Ok(category) => {
            categories.push(category);
            writeln!(out, "Created category: {}", name)
        }
        Err(err) => writeln!(out, "error: {}", err),
    }
}

fn deposit<W: Write>(
    categories: &mut [Category],
    name: &str,
    amount_text: &str,
    description: &str,
    out: &mut W,
) -> io::Result<()> {
    let category = match categories.iter_mut().find(|c| c.name() == name) {
        Some(category) => category,
        None => return writeln!(out, "error: {}", BudgetError::category_not_found(name)),
    };
    let amount = match Money::parse(amount_text) {
        Ok(amount) => amount,
        Err(err) => return writeln!(out, "error: {}", BudgetError::from(err)),
    };
    match category.deposit(amount, description) {
        Ok(()) => writeln!(out, "Deposited {} into {}", amount, name),
        Err(err) => writeln!(out, "error: {}", err),
    }
}

fn withdraw<W: Write>(
    categories: &mut [Category],
    name: &str,
    amount_text: &str,
    description: &str,
    out: &mut W,
) -> io::Result<()> {
    let category = match categories.iter_mut().find(|c| c.name() == name) {
        Some(category) => category,
        None => return writeln!(out, "error: {}", BudgetError::category_not_found(name)),
    };
    let amount = match Money::parse(amount_text) {
        Ok(amount) => amount,
        Err(err) => return writeln!(out, "error: {}", BudgetError::from(err)),
    };
    match category.withdraw(amount, description) {
        Ok(true) => writeln!(out, "Withdrew {} from {}", amount, name),
        Ok(false) => writeln!(
            out,
            "Declined: insufficient funds in '{}' (need {}, have {})",
            name,
            amount,
            category.balance()
        ),
        Err(err) => writeln!(out, "error: {}", err),
    }
}

fn transfer<W: Write>(
    categories: &mut [Category],
    from: &str,
    to: &str,
    amount_text: &str,
    out: &mut W,
) -> io::Result<()> {
    if from == to {
        return writeln!(out, "error: cannot transfer into the same category");
    }
    let from_idx = match categories.iter().position(|c| c.name() == from) {
        Some(idx) => idx,
        None => return writeln!(out, "error: {}", BudgetError::category_not_found(from)),
    };
    let to_idx = match categories.iter().position(|c| c.name() == to) {
        Some(idx) => idx,
        None => return writeln!(out, "error: {}", BudgetError::category_not_found(to)),
    };
    let amount = match Money::parse(amount_text) {
        Ok(amount) => amount,
        Err(err) => return writeln!(out, "error: {}", BudgetError::from(err)),
    };

    // Two disjoint &mut borrows out of one slice
    let (source, destination) = if from_idx < to_idx {
        let (left, right) = categories.split_at_mut(to_idx);
        (&mut left[from_idx], &mut right[0])
    } else {
        let (left, right) = categories.split_at_mut(from_idx);
        (&mut right[0], &mut left[to_idx])
    };

    match source.transfer(amount, destination) {
        Ok(true) => writeln!(out, "Transferred {} from {} to {}", amount, from, to),
        Ok(false) => writeln!(
            out,
            "Declined: insufficient funds in '{}' (need {}, have {})",
            from,
            amount,
            source.balance()
        ),
        Err(err) => writeln!(out, "error: {}", err),
    }
}

fn balance<W: Write>(categories: &[Category], name: &str, out: &mut W) -> io::Result<()> {
    match categories.iter().find(|c| c.name() == name) {
        Some(category) => writeln!(out, "{} balance: {}", name, category.balance()),
        None => writeln!(out, "error: {}", BudgetError::category_not_found(name)),
    }
}

fn check<W: Write>(
    categories: &[Category],
    name: &str,
    amount_text: &str,
    out: &mut W,
) -> io::Result<()> {
    let category = match categories.iter().find(|c| c.name() == name) {
        Some(category) => category,
        None => return writeln!(out, "error: {}", BudgetError::category_not_found(name)),
    };
    let amount = match Money::parse(amount_text) {
        Ok(amount) => amount,
        Err(err) => return writeln!(out, "error: {}", BudgetError::from(err)),
    };
    let answer = if category.check_funds(amount) { "yes" } else { "no" };
    writeln!(out, "{} can cover {}: {}", name, amount, answer)
}

fn report<W: Write>(categories: &[Category], name: &str, out: &mut W) -> io::Result<()> {
    match categories.iter().find(|c| c.name() == name) {
        Some(category) => writeln!(out, "{}", category),
        None => writeln!(out, "error: {}", BudgetError::category_not_found(name)),
    }
}

fn export<W: Write>(categories: &[Category], format: &str, out: &mut W) -> io::Result<()> {
    match format {
        "json" => {
            if let Err(err) = export_snapshot_json(categories, out, true) {
                return writeln!(out, "error: {}", err);
            }
            writeln!(out)
        }
        "csv" => {
            if let Err(err) = export_transactions_csv(categories, out) {
                return writeln!(out, "error: {}", err);
            }
            Ok(())
        }
        other => writeln!(out, "error: unknown export format: {}", other),
    }
}
