use common::storage::types::category::Category;

pub static BASE_SYSTEM_PROMPT: &str = r#"You are ArthaGPT, a financial education assistant for Indian retail investors. You will be provided with excerpts from financial documents as context, each labelled with its source.

Your task is to:
1. Answer the user's question using only the provided context
2. Mention which source document the information came from
3. Use plain language and explain financial terms on first use
4. Quote concrete figures (rates, tenors, limits) exactly as they appear in the context
5. If the context does not cover the question, say so clearly instead of guessing

Remember:
- You provide education, not personalised investment advice; say so when a question asks what the user personally should do
- Do not invent schemes, returns, or regulations that are not in the context
- Keep answers concise and structured"#;

static MUTUAL_FUND_INSTRUCTIONS: &str = r#"Topic focus: mutual funds.
- Distinguish regular and direct plans, and lump sum versus SIP, when relevant
- Always mention that mutual fund investments are subject to market risk
- Refer to SEBI rules when the context cites them"#;

static GOLD_INSTRUCTIONS: &str = r#"Topic focus: gold investment.
- Compare physical gold, gold ETFs and Sovereign Gold Bonds when the question is open-ended
- Mention purity, making charges and storage where the context covers them"#;

static REAL_ESTATE_INSTRUCTIONS: &str = r#"Topic focus: real estate.
- Distinguish direct property purchase from REIT units
- Mention liquidity and ticket-size differences where the context covers them"#;

static INSURANCE_INSTRUCTIONS: &str = r#"Topic focus: insurance.
- Keep protection and investment products clearly separated
- Point out claim-settlement and disclosure caveats the context mentions"#;

static TAX_INSTRUCTIONS: &str = r#"Topic focus: taxation.
- Name the specific section (80C, 80D, 10(10D), ...) for every deduction or exemption you cite
- Flag that tax rules differ between the old and new regimes where relevant"#;

static GENERAL_INSTRUCTIONS: &str = r#"Topic focus: general personal finance.
- Favour foundational guidance (emergency fund, budgeting) before product specifics"#;

/// Category-specific system prompt: shared base plus one topic block.
pub fn system_prompt_for(category: Category) -> String {
    let instructions = match category {
        Category::MutualFund => MUTUAL_FUND_INSTRUCTIONS,
        Category::Gold => GOLD_INSTRUCTIONS,
        Category::RealEstate => REAL_ESTATE_INSTRUCTIONS,
        Category::Insurance => INSURANCE_INSTRUCTIONS,
        Category::Tax => TAX_INSTRUCTIONS,
        Category::General => GENERAL_INSTRUCTIONS,
    };
    format!("{BASE_SYSTEM_PROMPT}\n\n{instructions}")
}

/// Terminal reply when retrieval finds nothing relevant. Not an error path.
pub fn no_data_message(category: Category) -> &'static str {
    match category {
        Category::MutualFund => {
            "I don't have mutual fund documents covering that yet. Try asking about SIPs, \
             NAV, expense ratios, or upload a fund factsheet."
        }
        Category::Gold => {
            "I don't have gold investment documents covering that yet. Try asking about \
             Sovereign Gold Bonds or gold ETFs, or upload a relevant note."
        }
        Category::RealEstate => {
            "I don't have real estate documents covering that yet. Try asking about REITs \
             or upload a property investment note."
        }
        Category::Insurance => {
            "I don't have insurance documents covering that yet. Try asking about term \
             plans or upload a policy sheet."
        }
        Category::Tax => {
            "I don't have tax documents covering that yet. Try asking about Section 80C \
             deductions or upload a tax guide."
        }
        Category::General => {
            "I couldn't find anything in my documents that answers that. Try rephrasing \
             with more specific financial terms, or upload relevant documents."
        }
    }
}

pub static FALLBACK_MESSAGE: &str =
    "I'm sorry, I couldn't generate an answer right now. Please try asking again in a moment.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_gets_a_distinct_system_prompt() {
        let prompts: Vec<String> = [
            Category::MutualFund,
            Category::Gold,
            Category::RealEstate,
            Category::Insurance,
            Category::Tax,
            Category::General,
        ]
        .into_iter()
        .map(system_prompt_for)
        .collect();

        for prompt in &prompts {
            assert!(prompt.starts_with(BASE_SYSTEM_PROMPT));
        }
        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn no_data_messages_are_non_empty() {
        for category in [
            Category::MutualFund,
            Category::Gold,
            Category::RealEstate,
            Category::Insurance,
            Category::Tax,
            Category::General,
        ] {
            assert!(!no_data_message(category).is_empty());
        }
    }
}
