use crate::{BlogPost, Category};
use chrono::NaiveDate;
use std::sync::LazyLock;

// NaiveDate construction is not const, so the catalogue is built lazily once.
static CATALOGUE: LazyLock<Vec<BlogPost>> = LazyLock::new(|| {
    vec![
        BlogPost {
            slug: "rent-vs-buy-case-study",
            title: "Rent vs. Buy: How Sarah Saved $15k in 5 Years",
            excerpt: "A deep dive into the math behind the biggest financial decision most \
                      people make. See how \"throwing money away on rent\" can actually build \
                      more wealth.",
            published: date(2026, 2, 1),
            read_minutes: 5,
            category: Category::Finance,
            related_tool: "Rent vs. Buy Analyzer",
            related_command: "rent-vs-buy",
            body: RENT_VS_BUY_CASE_STUDY,
        },
        BlogPost {
            slug: "millionaire-math-small-start",
            title: "The Millionaire Math: Starting with Just $500",
            excerpt: "You do not need a massive salary to become a millionaire. You just need \
                      time and consistency. We break down the exact path.",
            published: date(2026, 1, 28),
            read_minutes: 4,
            category: Category::Finance,
            related_tool: "Time to Millionaire Calculator",
            related_command: "millionaire",
            body: MILLIONAIRE_MATH,
        },
        BlogPost {
            slug: "macros-for-weight-loss",
            title: "Dialing in Macros: From \"Skinny Fat\" to Lean",
            excerpt: "Calories count, but macros matter. How shifting your Protein/Carb/Fat \
                      ratio can change your body composition without starving yourself.",
            published: date(2026, 1, 20),
            read_minutes: 6,
            category: Category::Health,
            related_tool: "Macro Split Calculator",
            related_command: "macros",
            body: MACROS_FOR_WEIGHT_LOSS,
        },
    ]
});

pub(crate) fn catalogue() -> &'static [BlogPost] {
    &CATALOGUE
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalogue date")
}

const RENT_VS_BUY_CASE_STUDY: &str = r#"
## The Dilemma

Sarah (28) was feeling the pressure. All her friends were buying condos. She felt like she was "throwing money away" on her $2,000/month apartment. She found a condo she liked for $400,000.

But was buying actually the smart move?

## The Numbers

Sarah used our **Rent vs. Buy Analyzer** to run the numbers.
- **Home Price:** $400,000
- **Down Payment:** $80,000 (20%)
- **Mortgage Rate:** 6.5%
- **Rent:** $2,000

The calculator revealed something surprising. While her mortgage payment would be similar to her rent, the **unrecoverable costs** of owning (interest, taxes, maintenance) were initially *higher* than her rent.

## The Strategy

Instead of buying, Sarah decided to:
1. Keep renting for $2,000.
2. Take the $80,000 she would have used for a down payment and invest it in a diversified index fund (assume 7% return).
3. Invest the monthly difference between renting and buying.

## The Result

After 5 years, the calculator projected:
- **Net Worth if Buying:** $112,000 (Home Equity)
- **Net Worth if Renting:** $127,000 (Investment Portfolio)

**Buying would cost her $15,000 in lost potential wealth over the first 5 years.**

## Key Takeaway

Buying isn't always the winner. High interest rates and opportunity cost (what else you could do with that cash) matter huge.

Don't guess. Run your own numbers using the calculator below.
"#;

const MILLIONAIRE_MATH: &str = r#"
## The Myth

"I'll invest when I have more money."

This is the most dangerous lie in personal finance. Waiting cost you millions.

## The Power of Compound Interest

Let's look at two people, both 25 years old.
- **Investor A** starts putting $500/month into the market (8% return).
- **Investor B** waits until they are 35 to start, but puts in $1,000/month.

Who wins at age 60?

Using the **Time to Millionaire Calculator**, we can see:
- Investor A (Started early, contributed less): **$1.1 Million**
- Investor B (Started late, contributed double): **$950k**

## Your Path to $1M

If you start with $0, here is what you need to save monthly to hit $1 Million by age 60 (assuming 8% return):
- **Age 20:** $285/mo
- **Age 30:** $670/mo
- **Age 40:** $1,690/mo
- **Age 50:** $5,400/mo

The best time to start was yesterday. The second best time is today.
"#;

const MACROS_FOR_WEIGHT_LOSS: &str = r#"
## The Problem

Mark was hitting the gym 4 days a week but looked the same. He was "skinny fat" - average weight, but no definition. He was eating "healthy" (salads, granola), but not tracking.

## The Calculation

Mark used the **Macro Split Calculator** to check his TDEE (Total Daily Energy Expenditure).
- **Goal:** Lose Fat / Build Muscle (Recomp)
- **Activity:** Moderate Exercise

The calculator suggested a "High Protein" split:
- **Protein:** 35%
- **Fats:** 35%
- **Carbs:** 30%

## The Shift

Mark realized he was only eating about 60g of protein a day. The calculator aimed for 160g.

He swapped:
- Granola (High Carb/Fat) -> Greek Yogurt (High Protein)
- Pasta Dinner -> Chicken & Veggies

## The Result

In 12 weeks, Mark didn't lose much *weight* on the scale, but his waist dropped 2 inches and his arms grew. He finally looked like he lifted.

It wasn't about eating *less*. It was about eating *right*.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let posts = catalogue();
        for (i, a) in posts.iter().enumerate() {
            for b in &posts[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
