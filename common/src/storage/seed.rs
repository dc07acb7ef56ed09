use tracing::info;

use crate::error::AppError;

use super::corpus::DocumentStore;
use super::types::category::Category;
use super::types::document_chunk::ChunkInput;

/// Loads the bundled reference corpus into the store.
///
/// These excerpts stand in for uploaded documents so the assistant can answer
/// out of the box; user uploads append to the same corpus at runtime.
pub async fn seed_corpus(store: &DocumentStore) -> Result<usize, AppError> {
    let ids = store.add_chunks(reference_documents()).await?;
    info!(chunks = ids.len(), "Seeded reference corpus");
    Ok(ids.len())
}

fn reference_documents() -> Vec<ChunkInput> {
    vec![
        ChunkInput::new(
            "Axis Bluechip Fund is an open-ended large cap equity scheme investing in the \
             top 100 companies by market capitalisation. The fund's NAV is declared on every \
             business day, and the regular plan carries an expense ratio of 1.63 percent. \
             Investors can start a SIP from Rs 500 per month; SIP instalments purchase units \
             at the prevailing NAV on the instalment date, which averages the purchase cost \
             across market cycles. Exit load is 1 percent if units are redeemed within 12 \
             months. The scheme is benchmarked against the Nifty 50 TRI.",
            "Axis Bluechip Fund Factsheet",
            Category::MutualFund,
            &[
                "axis bluechip",
                "mutual fund",
                "sip",
                "nav",
                "expense ratio",
                "large cap",
                "equity",
                "exit load",
            ],
        ),
        ChunkInput::new(
            "All mutual funds in India are regulated by SEBI. Before investing, complete \
             your KYC with any registrar. Equity Linked Savings Schemes (ELSS) carry a \
             three year lock-in, the shortest among tax saving instruments, and qualify \
             for deduction under Section 80C. Compare schemes on rolling returns and \
             expense ratio rather than on the previous year's performance alone, and \
             prefer direct plans for a lower expense ratio when you do not need \
             distributor support.",
            "SEBI Mutual Fund Investor Guide",
            Category::MutualFund,
            &[
                "sebi",
                "mutual fund",
                "elss",
                "kyc",
                "lock-in",
                "80c",
                "direct plan",
                "expense ratio",
            ],
        ),
        ChunkInput::new(
            "Sovereign Gold Bonds (SGBs) are issued by the RBI on behalf of the Government \
             of India and are denominated in grams of gold. Bonds carry a fixed interest of \
             2.50 percent per annum on the initial investment, paid half-yearly, over an \
             eight year tenor with an exit option from the fifth year. Capital gains on \
             redemption at maturity are exempt from tax for individuals. SGBs eliminate \
             making charges and purity concerns associated with physical gold.",
            "RBI Sovereign Gold Bond Scheme Notice",
            Category::Gold,
            &[
                "sovereign gold bond",
                "sgb",
                "gold",
                "rbi",
                "interest",
                "maturity",
                "tenor",
            ],
        ),
        ChunkInput::new(
            "Gold ETFs are exchange traded funds that track the domestic price of 99.5 \
             percent purity gold. Units are held in demat form and trade on the NSE and BSE \
             at close to the live gold price, so there are no making charges or storage \
             risks. Each unit typically represents one gram of gold. Expense ratios range \
             between 0.5 and 1 percent. Gold ETFs suit investors who want gold exposure \
             with intraday liquidity rather than jewellery or coins.",
            "Gold ETF Primer",
            Category::Gold,
            &["gold etf", "gold", "demat", "purity", "bullion", "liquidity"],
        ),
        ChunkInput::new(
            "Real Estate Investment Trusts (REITs) own and operate income producing \
             commercial property, chiefly leased office parks. Indian REITs must \
             distribute at least 90 percent of net distributable cash flow to unit \
             holders, typically every quarter, producing a rental yield of 6 to 7 percent \
             plus potential capital appreciation. Units trade on stock exchanges with a \
             minimum lot of one unit, making commercial real estate accessible without \
             buying property outright or taking a home loan.",
            "REIT Investor Primer",
            Category::RealEstate,
            &[
                "reit",
                "real estate",
                "rental yield",
                "distribution",
                "property",
                "commercial",
            ],
        ),
        ChunkInput::new(
            "A term insurance plan pays the sum assured to the nominee if the policyholder \
             dies during the policy term; there is no maturity benefit, which keeps \
             premiums low. A sum assured of 10 to 15 times annual income is the common \
             recommendation. Premiums are eligible for deduction under Section 80C and \
             payouts to nominees are tax free under Section 10(10D). Check the insurer's \
             claim settlement ratio published by IRDAI before buying, and disclose health \
             history accurately to avoid claim rejection.",
            "Term Insurance Buyer Sheet",
            Category::Insurance,
            &[
                "term insurance",
                "term plan",
                "sum assured",
                "premium",
                "irdai",
                "claim settlement",
                "nominee",
            ],
        ),
        ChunkInput::new(
            "Section 80C of the Income Tax Act allows a deduction of up to Rs 1.5 lakh per \
             financial year under the old regime. Eligible instruments include ELSS mutual \
             funds (three year lock-in), Public Provident Fund (15 year tenure, tax free \
             interest), National Savings Certificates, five year tax saver fixed deposits, \
             life insurance premiums and home loan principal repayment. Long term capital \
             gains on equity above Rs 1.25 lakh a year are taxed at 12.5 percent; short \
             term gains at 20 percent.",
            "Section 80C Tax Planning Guide",
            Category::Tax,
            &[
                "80c",
                "tax",
                "deduction",
                "elss",
                "ppf",
                "capital gains",
                "income tax",
            ],
        ),
        ChunkInput::new(
            "Before picking any investment, build an emergency fund covering six months of \
             household expenses and park it in a sweep-in fixed deposit or a liquid fund \
             for same or next day access. Budget with the 50-30-20 rule: 50 percent of \
             income for needs, 30 percent for wants, 20 percent for savings and \
             investments. Review the allocation yearly and step up savings with every \
             salary increase.",
            "Personal Finance Basics Handbook",
            Category::General,
            &[
                "emergency fund",
                "savings",
                "liquid fund",
                "budgeting",
                "50-30-20",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_every_category_except_none() {
        let store = DocumentStore::new();
        let added = seed_corpus(&store).await.expect("seeding failed");
        assert_eq!(added, store.len().await);

        let chunks = store.all_chunks().await;
        for category in [
            Category::MutualFund,
            Category::Gold,
            Category::RealEstate,
            Category::Insurance,
            Category::Tax,
            Category::General,
        ] {
            assert!(
                chunks.iter().any(|c| c.metadata.category == category),
                "no seed chunk for category {category}"
            );
        }
    }

    #[test]
    fn every_seed_document_passes_validation() {
        for input in reference_documents() {
            input.validate().expect("seed document failed validation");
        }
    }
}
