//! Demo walkthrough
//!
//! Seeds a few categories with a sample month of activity and prints
//! every report the crate can produce, including one declined
//! withdrawal to show the insufficient-funds path.

use crate::chart::create_spend_chart;
use crate::display::format_category_summary;
use crate::error::BudgetResult;
use crate::models::{Category, Money};

/// Run the demo walkthrough, printing reports to stdout
pub fn run_demo() -> BudgetResult<()> {
    let mut food = Category::new("Food")?;
    food.deposit(Money::from_cents(100000), "deposit")?;
    food.withdraw(Money::from_cents(1015), "groceries")?;
    food.withdraw(
        Money::from_cents(1589),
        "restaurant and more food for dessert",
    )?;

    let mut clothing = Category::new("Clothing")?;
    food.transfer(Money::from_cents(5000), &mut clothing)?;
    clothing.withdraw(Money::from_cents(2555), "jeans")?;

    let mut auto = Category::new("Auto")?;
    auto.deposit(Money::from_cents(100000), "initial deposit")?;
    auto.withdraw(Money::from_cents(1500), "fuel")?;

    let attempted = Money::from_cents(10000);
    if !clothing.withdraw(attempted, "designer jacket")? {
        println!(
            "Declined: insufficient funds in '{}' (need {}, have {})",
            clothing.name(),
            attempted,
            clothing.balance()
        );
        println!();
    }

    let categories = [food, clothing, auto];
    for category in &categories {
        println!("{}", category);
        println!();
    }

    print!("{}", format_category_summary(&categories));
    println!();
    println!("{}", create_spend_chart(&categories));

    Ok(())
}
