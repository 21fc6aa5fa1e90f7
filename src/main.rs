mod cli;
mod render;

use anyhow::{Context, bail};
use chrono::Local;
use clap::Parser;
use cli::{BlogCommands, Cli, Commands, ProfileCommands};
use comfy_table::Cell;
use configuration::Config;
use core_types::{Sex, UnitSystem};
use finance::{
    AutoLoanInputs, DebtPayoffInputs, EmergencyFundInputs, FireInputs, InvestmentInputs,
    MillionaireInputs, MortgageInputs, RentVsBuyInputs, RetirementInputs,
};
use health::BodyMetrics;
use profile_store::{ProfileStore, ProfileUpdate};
use render::{money, num_cell, table};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(json = cli.json, "starting");
    let config = configuration::load_config()?;
    let store = ProfileStore::open(&config.storage.profile_file);

    match cli.command {
        Commands::Mortgage(args) => mortgage(&args, &config, cli.json),
        Commands::AutoLoan(args) => auto_loan(&args, &config, cli.json),
        Commands::Investment(args) => investment(&args, &config, cli.json),
        Commands::Retirement(args) => retirement(&args, &config, &store, cli.json),
        Commands::Millionaire(args) => millionaire(&args, &config, cli.json),
        Commands::EmergencyFund(args) => emergency_fund(&args, &config, cli.json),
        Commands::DebtPayoff(args) => debt_payoff(&args, &config, cli.json),
        Commands::Fire(args) => fire(&args, &config, &store, cli.json),
        Commands::RentVsBuy(args) => rent_vs_buy(&args, &config, cli.json),
        Commands::Bmi(args) => bmi(&args, cli.json),
        Commands::Calories(args) => calories(&args, cli.json),
        Commands::Macros(args) => macros(&args, cli.json),
        Commands::OneRepMax(args) => one_rep_max(&args, cli.json),
        Commands::Profile { command } => profile(&command, &store, cli.json),
        Commands::Blog { command } => blog(&command, cli.json),
    }
}

fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Keeps long yearly tables readable: the first point, every fifth, the last.
fn sampled(index: usize, len: usize, step_in_series: u32) -> bool {
    index == 0 || step_in_series % 5 == 0 || index + 1 == len
}

// ==============================================================================
// Finance commands
// ==============================================================================

fn mortgage(args: &cli::MortgageArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let outcome = finance::mortgage::plan(&MortgageInputs {
        home_price: args.home_price,
        down_payment: args.down_payment,
        annual_rate_pct: args.rate,
        term_years: args.term_years,
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("Loan amount:      {}", money(outcome.loan_amount, d));
    println!("Monthly payment:  {}", money(outcome.monthly_payment, d));
    println!("Total interest:   {}", money(outcome.total_interest, d));
    println!("Total cost:       {}", money(outcome.total_cost, d));

    let mut schedule = table(&["Month", "Balance", "Principal paid", "Interest paid"]);
    for point in &outcome.schedule {
        schedule.add_row(vec![
            num_cell(point.month.to_string()),
            num_cell(money(point.balance, d)),
            num_cell(money(point.principal, d)),
            num_cell(money(point.interest, d)),
        ]);
    }
    println!("{schedule}");
    Ok(())
}

fn auto_loan(args: &cli::AutoLoanArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let outcome = finance::auto_loan::plan(&AutoLoanInputs {
        vehicle_price: args.price,
        down_payment: args.down_payment,
        trade_in: args.trade_in,
        annual_rate_pct: args.rate,
        term_months: args.term_months,
        sales_tax_pct: args.sales_tax,
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("Sales tax:        {}", money(outcome.sales_tax, d));
    println!("Amount financed:  {}", money(outcome.loan_amount, d));
    if outcome.loan_amount.is_zero() {
        println!("Nothing to finance: the down payment and trade-in cover the purchase.");
        println!("Total cost:       {}", money(outcome.total_cost, d));
        return Ok(());
    }
    println!("Monthly payment:  {}", money(outcome.monthly_payment, d));
    println!("Total interest:   {}", money(outcome.total_interest, d));
    println!("Total cost:       {}", money(outcome.total_cost, d));

    let mut schedule = table(&["Month", "Balance", "Principal paid", "Interest paid"]);
    for point in &outcome.schedule {
        schedule.add_row(vec![
            num_cell(point.month.to_string()),
            num_cell(money(point.balance, d)),
            num_cell(money(point.principal, d)),
            num_cell(money(point.interest, d)),
        ]);
    }
    println!("{schedule}");
    Ok(())
}

fn investment(args: &cli::InvestmentArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let return_rate = args
        .return_rate
        .unwrap_or(config.projections.default_return_rate_pct);
    let outcome = finance::investment::project(&InvestmentInputs {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_return_pct: return_rate,
        years: args.years,
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("Final balance:   {}", money(outcome.final_balance, d));
    println!("Total invested:  {}", money(outcome.total_invested, d));
    println!("Total gains:     {}", money(outcome.total_gains, d));

    let mut series = table(&["Year", "Total", "Invested", "Gains"]);
    let len = outcome.series.len();
    for (i, point) in outcome.series.iter().enumerate() {
        if sampled(i, len, point.year) {
            series.add_row(vec![
                num_cell(point.year.to_string()),
                num_cell(money(point.total, d)),
                num_cell(money(point.invested, d)),
                num_cell(money(point.gains, d)),
            ]);
        }
    }
    println!("{series}");
    Ok(())
}

fn retirement(
    args: &cli::RetirementArgs,
    config: &Config,
    store: &ProfileStore,
    json: bool,
) -> anyhow::Result<()> {
    let profile = store.load()?;
    let return_rate = args
        .return_rate
        .unwrap_or(config.projections.default_return_rate_pct);

    let mut inputs = RetirementInputs::from_profile(&profile, return_rate);
    if let Some(age) = args.age {
        inputs.current_age = age;
    }
    if let Some(retirement_age) = args.retirement_age {
        inputs.retirement_age = retirement_age;
    }
    if let Some(current_savings) = args.current_savings {
        inputs.current_savings = current_savings;
    }
    if let Some(monthly_contribution) = args.monthly_contribution {
        inputs.monthly_contribution = monthly_contribution;
    }

    let outcome = finance::retirement::project(&inputs)?;

    if args.save {
        store.update(&ProfileUpdate {
            age: args.age,
            retirement_age: args.retirement_age,
            current_savings: args.current_savings,
            monthly_contribution: args.monthly_contribution,
            ..ProfileUpdate::default()
        })?;
        eprintln!("Profile updated.");
    }
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!(
        "Savings at {}:        {}",
        inputs.retirement_age,
        money(outcome.total_at_retirement, d)
    );
    println!(
        "Total contributions:  {}",
        money(outcome.total_contributions, d)
    );
    println!(
        "Interest earned:      {}",
        money(outcome.total_interest, d)
    );

    let mut series = table(&["Age", "Savings", "Contributions", "Interest"]);
    let len = outcome.series.len();
    for (i, point) in outcome.series.iter().enumerate() {
        if sampled(i, len, point.age - inputs.current_age) {
            series.add_row(vec![
                num_cell(point.age.to_string()),
                num_cell(money(point.savings, d)),
                num_cell(money(point.contributions, d)),
                num_cell(money(point.interest, d)),
            ]);
        }
    }
    println!("{series}");
    Ok(())
}

fn millionaire(args: &cli::MillionaireArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let return_rate = args
        .return_rate
        .unwrap_or(config.projections.default_return_rate_pct);
    let outcome = finance::millionaire::project(&MillionaireInputs {
        current_balance: args.balance,
        monthly_contribution: args.monthly,
        annual_return_pct: return_rate,
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    if outcome.reached {
        let (years, months) = outcome.years_and_months();
        match (years, months) {
            (0, 0) => println!("Already there."),
            (0, m) => println!("Time to {}: {m} months", money(finance::millionaire::TARGET, d)),
            (y, 0) => println!("Time to {}: {y} years", money(finance::millionaire::TARGET, d)),
            (y, m) => println!(
                "Time to {}: {y} years, {m} months",
                money(finance::millionaire::TARGET, d)
            ),
        }
    } else {
        println!("Not reached within 100 years.");
    }
    println!("Final balance:  {}", money(outcome.final_balance, d));

    let mut series = table(&["Year", "Total", "Invested", "Gains"]);
    let len = outcome.series.len();
    for (i, point) in outcome.series.iter().enumerate() {
        if sampled(i, len, point.year) {
            series.add_row(vec![
                num_cell(point.year.to_string()),
                num_cell(money(point.total, d)),
                num_cell(money(point.invested, d)),
                num_cell(money(point.gains, d)),
            ]);
        }
    }
    println!("{series}");
    Ok(())
}

fn emergency_fund(
    args: &cli::EmergencyFundArgs,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = finance::emergency_fund::plan(&EmergencyFundInputs {
        essential_monthly: args.essential,
        optional_monthly: args.optional,
        current_savings: args.savings,
        risk: args.risk.into(),
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("Target fund:      {}", money(outcome.target_fund, d));
    println!(
        "Current cover:    {} months",
        outcome.months_of_cover.round_dp(1)
    );
    println!("Progress:         {}%", outcome.progress_pct.round_dp(1));
    Ok(())
}

fn debt_payoff(args: &cli::DebtPayoffArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let outcome = finance::debt_payoff::plan(&DebtPayoffInputs {
        debts: args.debts.clone(),
        extra_monthly: args.extra,
        strategy: args.strategy.into(),
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    let start = args
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    if outcome.debt_free {
        println!(
            "Debt-free in {} months ({} years, {} months)",
            outcome.months,
            outcome.months / 12,
            outcome.months % 12
        );
        if let Some(date) = finance::debt_payoff::projected_payoff_date(start, outcome.months) {
            println!("Projected payoff: {}", date.format("%B %Y"));
        }
    } else {
        println!(
            "Still in debt after {} months; the budget does not keep up with interest.",
            outcome.months
        );
    }
    println!("Total interest:   {}", money(outcome.total_interest, d));

    let mut history = table(&["Month", "Remaining balance", "Interest paid"]);
    let len = outcome.history.len();
    for (i, point) in outcome.history.iter().enumerate() {
        if sampled(i, len, point.month / 3) {
            history.add_row(vec![
                num_cell(point.month.to_string()),
                num_cell(money(point.remaining_balance, d)),
                num_cell(money(point.interest_paid, d)),
            ]);
        }
    }
    println!("{history}");
    Ok(())
}

fn fire(
    args: &cli::FireArgs,
    config: &Config,
    store: &ProfileStore,
    json: bool,
) -> anyhow::Result<()> {
    let profile = store.load()?;
    let return_rate = args
        .return_rate
        .unwrap_or(config.projections.default_return_rate_pct);

    let mut inputs = FireInputs::from_profile(&profile, return_rate);
    if let Some(age) = args.age {
        inputs.current_age = age;
    }
    if let Some(net_worth) = args.net_worth {
        inputs.current_net_worth = net_worth;
    }
    if let Some(income) = args.income {
        inputs.annual_income = income;
        // Without an explicit spending figure, re-derive it from the new
        // income and the profile's contribution rate.
        inputs.annual_spending =
            income - profile.monthly_contribution * Decimal::from(12u32);
    }
    if let Some(spending) = args.spending {
        inputs.annual_spending = spending;
    }
    if let Some(swr) = args.swr {
        inputs.safe_withdrawal_rate_pct = swr;
    }
    if args.adjust_inflation || args.inflation_rate.is_some() {
        inputs.inflation_rate_pct = Some(
            args.inflation_rate
                .unwrap_or(config.projections.default_inflation_rate_pct),
        );
    }
    inputs.max_years = args
        .years
        .unwrap_or(config.projections.max_projection_years);

    let outcome = finance::fire::project(&inputs)?;

    if args.save {
        store.update(&ProfileUpdate {
            age: args.age,
            current_savings: args.net_worth,
            annual_income: args.income,
            safe_withdrawal_rate: args.swr,
            ..ProfileUpdate::default()
        })?;
        eprintln!("Profile updated.");
    }
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("FIRE number:      {}", money(outcome.fire_number, d));
    match outcome.years_to_fire {
        Some(years) if years.is_zero() => println!("Financially independent today."),
        Some(years) => {
            println!("Years to FIRE:    {years}");
            if let Some(date) = outcome.freedom_date(Local::now().date_naive()) {
                println!("Freedom date:     {}", date.format("%B %Y"));
            }
        }
        None => println!(
            "Not reached within {} years at this savings rate.",
            inputs.max_years
        ),
    }

    let mut series = table(&["Age", "Net worth", "Target", "Passive income"]);
    let len = outcome.series.len();
    for (i, point) in outcome.series.iter().enumerate() {
        if sampled(i, len, point.age - inputs.current_age) {
            series.add_row(vec![
                num_cell(point.age.to_string()),
                num_cell(money(point.net_worth, d)),
                num_cell(money(point.target, d)),
                num_cell(money(point.passive_income, d)),
            ]);
        }
    }
    println!("{series}");
    Ok(())
}

fn rent_vs_buy(args: &cli::RentVsBuyArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let investment_return = args
        .investment_return
        .unwrap_or(config.projections.default_return_rate_pct);
    let outcome = finance::rent_vs_buy::compare(&RentVsBuyInputs {
        home_price: args.home_price,
        down_payment: args.down_payment,
        annual_rate_pct: args.rate,
        loan_term_years: args.term_years,
        buying_closing_costs_pct: args.buying_closing_costs,
        selling_closing_costs_pct: args.selling_closing_costs,
        maintenance_pct: args.maintenance,
        home_appreciation_pct: args.appreciation,
        monthly_rent: args.rent,
        rent_increase_pct: args.rent_increase,
        monthly_renters_insurance: args.renters_insurance,
        investment_return_pct: investment_return,
        horizon_years: args.horizon,
    })?;
    if json {
        return emit_json(&outcome);
    }

    let d = &config.display;
    println!("Monthly mortgage: {}", money(outcome.monthly_mortgage, d));
    match outcome.breakeven_year {
        Some(year) => println!("Buying pulls ahead in year {year}."),
        None => println!(
            "Renting stays ahead for the whole {}-year horizon.",
            args.horizon
        ),
    }

    let mut series = table(&[
        "Year",
        "Rent net worth",
        "Buy net worth",
        "Rent cost",
        "Buy cost",
    ]);
    let len = outcome.series.len();
    for (i, point) in outcome.series.iter().enumerate() {
        if sampled(i, len, point.year) {
            series.add_row(vec![
                num_cell(point.year.to_string()),
                num_cell(money(point.rent_net_worth, d)),
                num_cell(money(point.buy_net_worth, d)),
                num_cell(money(point.rent_cost, d)),
                num_cell(money(point.buy_cost, d)),
            ]);
        }
    }
    println!("{series}");
    Ok(())
}

// ==============================================================================
// Health commands
// ==============================================================================

fn bmi_reading(body: &cli::BodyArgs) -> anyhow::Result<health::BmiReading> {
    match UnitSystem::from(body.units) {
        UnitSystem::Metric => {
            let height = body
                .height_cm
                .context("--height-cm is required with metric units")?;
            let weight = body
                .weight_kg
                .context("--weight-kg is required with metric units")?;
            Ok(health::bmi::from_metric(height, weight)?)
        }
        UnitSystem::Imperial => {
            let feet = body.feet.context("--feet is required with imperial units")?;
            let pounds = body
                .pounds
                .context("--pounds is required with imperial units")?;
            Ok(health::bmi::from_imperial(
                feet,
                body.inches.unwrap_or(0.0),
                pounds,
            )?)
        }
    }
}

fn body_metrics(sex: Sex, age: u32, body: &cli::BodyArgs) -> anyhow::Result<BodyMetrics> {
    match UnitSystem::from(body.units) {
        UnitSystem::Metric => {
            let height = body
                .height_cm
                .context("--height-cm is required with metric units")?;
            let weight = body
                .weight_kg
                .context("--weight-kg is required with metric units")?;
            Ok(BodyMetrics::new(sex, age, height, weight)?)
        }
        UnitSystem::Imperial => {
            let feet = body.feet.context("--feet is required with imperial units")?;
            let pounds = body
                .pounds
                .context("--pounds is required with imperial units")?;
            let height_in = feet * 12.0 + body.inches.unwrap_or(0.0);
            Ok(BodyMetrics::from_imperial(sex, age, height_in, pounds)?)
        }
    }
}

fn bmi(args: &cli::BmiArgs, json: bool) -> anyhow::Result<()> {
    let reading = bmi_reading(&args.body)?;
    if json {
        return emit_json(&reading);
    }
    println!("BMI:       {:.1}", reading.bmi);
    println!("Category:  {}", reading.category.as_str());
    Ok(())
}

fn calories(args: &cli::CaloriesArgs, json: bool) -> anyhow::Result<()> {
    let metrics = body_metrics(args.sex.into(), args.age, &args.body)?;
    let activity: health::ActivityLevel = args.activity.into();
    let bmr = metrics.bmr();
    let tdee = metrics.tdee(activity);
    if json {
        return emit_json(&serde_json::json!({
            "bmr": bmr.round(),
            "tdee": tdee.round(),
        }));
    }

    println!("BMR:   {:.0} cal/day", bmr);
    println!("TDEE:  {:.0} cal/day", tdee);

    let mut levels = table(&["Activity", "Calories/day"]);
    for level in [
        health::ActivityLevel::Sedentary,
        health::ActivityLevel::Light,
        health::ActivityLevel::Moderate,
        health::ActivityLevel::Heavy,
        health::ActivityLevel::Athlete,
    ] {
        levels.add_row(vec![
            Cell::new(format!("{level:?}")),
            num_cell(format!("{:.0}", metrics.tdee(level))),
        ]);
    }
    println!("{levels}");
    Ok(())
}

fn macros(args: &cli::MacrosArgs, json: bool) -> anyhow::Result<()> {
    let inner = &args.calories;
    let metrics = body_metrics(inner.sex.into(), inner.age, &inner.body)?;
    let split = health::macros::split(
        &metrics,
        inner.activity.into(),
        args.goal.into(),
        args.diet.into(),
    )?;
    if json {
        return emit_json(&split);
    }

    println!("Daily budget:  {} cal", split.calories);
    let mut macros = table(&["Macro", "Grams/day"]);
    macros.add_row(vec![Cell::new("Protein"), num_cell(split.protein_g.to_string())]);
    macros.add_row(vec![Cell::new("Carbs"), num_cell(split.carbs_g.to_string())]);
    macros.add_row(vec![Cell::new("Fat"), num_cell(split.fats_g.to_string())]);
    println!("{macros}");
    Ok(())
}

fn one_rep_max(args: &cli::OneRepMaxArgs, json: bool) -> anyhow::Result<()> {
    let estimate = health::one_rep_max::estimate(args.weight, args.reps, args.formula.into())?;
    if json {
        return emit_json(&estimate);
    }

    println!("Estimated 1RM:  {:.0}", estimate.one_rep_max);
    let mut sets = table(&["% of 1RM", "Weight", "Reps"]);
    for set in &estimate.training_table {
        sets.add_row(vec![
            num_cell(format!("{}%", set.percent)),
            num_cell(format!("{:.0}", set.weight)),
            num_cell(set.reps.to_string()),
        ]);
    }
    println!("{sets}");
    Ok(())
}

// ==============================================================================
// Profile and blog commands
// ==============================================================================

fn profile(command: &ProfileCommands, store: &ProfileStore, json: bool) -> anyhow::Result<()> {
    match command {
        ProfileCommands::Show => {
            let profile = store.load()?;
            if json {
                return emit_json(&profile);
            }
            let mut fields = table(&["Field", "Value"]);
            fields.add_row(vec!["Age".to_string(), profile.age.to_string()]);
            fields.add_row(vec![
                "Retirement age".to_string(),
                profile.retirement_age.to_string(),
            ]);
            fields.add_row(vec![
                "Annual income".to_string(),
                profile.annual_income.to_string(),
            ]);
            fields.add_row(vec![
                "Current savings".to_string(),
                profile.current_savings.to_string(),
            ]);
            fields.add_row(vec![
                "Monthly contribution".to_string(),
                profile.monthly_contribution.to_string(),
            ]);
            fields.add_row(vec![
                "Safe withdrawal rate".to_string(),
                format!("{}%", profile.safe_withdrawal_rate),
            ]);
            println!("{fields}");
            println!("Stored at {}", store.path().display());
            Ok(())
        }
        ProfileCommands::Set(args) => {
            let update = ProfileUpdate {
                age: args.age,
                retirement_age: args.retirement_age,
                annual_income: args.annual_income,
                current_savings: args.current_savings,
                monthly_contribution: args.monthly_contribution,
                safe_withdrawal_rate: args.safe_withdrawal_rate,
            };
            if update.is_empty() {
                bail!("no fields given; see `smartcalc profile set --help`");
            }
            let profile = store.update(&update)?;
            if json {
                return emit_json(&profile);
            }
            println!("Profile updated.");
            Ok(())
        }
        ProfileCommands::Reset => {
            let profile = store.reset()?;
            if json {
                return emit_json(&profile);
            }
            println!("Profile reset to defaults.");
            Ok(())
        }
    }
}

fn blog(command: &BlogCommands, json: bool) -> anyhow::Result<()> {
    match command {
        BlogCommands::List { category } => {
            let posts: Vec<&content::BlogPost> = match category {
                Some(category) => content::by_category((*category).into()),
                None => content::all().iter().collect(),
            };
            if json {
                return emit_json(&posts);
            }
            let mut listing = table(&["Published", "Slug", "Title", "Category", "Min", "Try"]);
            for post in posts {
                listing.add_row(vec![
                    post.published.to_string(),
                    post.slug.to_string(),
                    post.title.to_string(),
                    post.category.as_str().to_string(),
                    post.read_minutes.to_string(),
                    post.related_command.to_string(),
                ]);
            }
            println!("{listing}");
            Ok(())
        }
        BlogCommands::Show { slug } => {
            let Some(post) = content::find(slug) else {
                let known: Vec<&str> = content::all().iter().map(|p| p.slug).collect();
                bail!("no article `{slug}`; available: {}", known.join(", "));
            };
            if json {
                return emit_json(post);
            }
            println!("# {}", post.title);
            println!(
                "{} | {} min read | {}",
                post.published.format("%B %-d, %Y"),
                post.read_minutes,
                post.category.as_str()
            );
            println!(
                "Try it yourself: {} (`smartcalc {}`)",
                post.related_tool, post.related_command
            );
            println!("{}", post.body);
            Ok(())
        }
    }
}
