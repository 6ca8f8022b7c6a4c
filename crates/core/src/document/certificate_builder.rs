//! Builds the certificate and its annexures as a [`Document`].

use super::annexure_columns::AnnexureColumns;
use super::document_model::{Align, Document, Paragraph, Table};
use super::formatting::{format_amount, format_amount_or_dash, format_date};
use crate::certificates::{Category, NetWorthData, NetWorthSummary};
use crate::constants::UNNAMED_INDIVIDUAL;

const TITLE_LINE_1: &str = "Independent Practitioner's Certificate on Net Worth where no Books of";
const TITLE_LINE_2: &str = "Account have been maintained (For VISA Application Purpose)";
const SERIAL_HEADER: &str = "Sr. No.";

/// Layout-neutral certificate for `data`, using figures from `summary`.
pub fn build_certificate(data: &NetWorthData, summary: &NetWorthSummary) -> Document {
    let mut doc = Document::default();
    let ctx = Context::new(data, summary);

    certificate_pages(&mut doc, &ctx);
    doc.page_break();
    annexure_pages(&mut doc, &ctx);
    doc
}

struct Context<'a> {
    data: &'a NetWorthData,
    summary: &'a NetWorthSummary,
    date: String,
    individuals_phrase: String,
    foreign_header: String,
}

impl<'a> Context<'a> {
    fn new(data: &'a NetWorthData, summary: &'a NetWorthSummary) -> Self {
        let individuals_phrase = match data.individuals.as_slice() {
            [] => UNNAMED_INDIVIDUAL.to_string(),
            [only] => only.name_with_passport(),
            [first, rest @ ..] => format!(
                "{} and {} other individual(s)",
                first.name_with_passport(),
                rest.len()
            ),
        };
        Self {
            data,
            summary,
            date: format_date(data.certificate_date),
            individuals_phrase,
            foreign_header: format!(
                "Amount in {}@ {} INR",
                summary.foreign_currency, summary.exchange_rate
            ),
        }
    }
}

fn heading(doc: &mut Document, text: &str) {
    doc.paragraph(Paragraph::text(text).bold().underline().align(Align::Left));
}

fn certificate_pages(doc: &mut Document, ctx: &Context<'_>) {
    let data = ctx.data;

    doc.paragraph(
        Paragraph::text(format!("{} {}", TITLE_LINE_1, TITLE_LINE_2))
            .bold()
            .underline()
            .align(Align::Center),
    );
    doc.blank();

    doc.paragraph(Paragraph::text("To").align(Align::Left));
    doc.paragraph(Paragraph::text(data.embassy_name.clone()).align(Align::Left));
    for line in data.embassy_address.lines().filter(|l| !l.trim().is_empty()) {
        doc.paragraph(Paragraph::text(line.trim()).align(Align::Left));
    }
    doc.blank();

    heading(doc, &format!("{} {}", TITLE_LINE_1, TITLE_LINE_2));

    doc.text(format!(
        "1. This Certificate is issued in accordance with the terms of my/our engagement letter/agreement dated {}.",
        format_date(data.engagement_date)
    ));
    doc.text(format!(
        "2. I/we have been engaged by {} (hereinafter referred to as the \"individuals\") having residential address(es) at {} to certify the Net Worth as at {} for submission to {} for VISA application purpose.",
        ctx.individuals_phrase,
        data.distinct_addresses().join("; "),
        ctx.date,
        data.embassy_name
    ));

    heading(doc, "Individual's Responsibility");
    doc.text(format!(
        "3. The individual is responsible for preparing the Statement of Net Worth (\"the Statement\") as at {} and for maintaining adequate records and internal controls to support the accuracy and completeness of the information contained therein.",
        ctx.date
    ));

    heading(doc, "Practitioner's Responsibility");
    doc.text(format!(
        "4. My/our responsibility is to examine and certify the Statement of Net Worth as at {} based on the supporting documents provided. The examination was performed in accordance with the ICAI Guidance Note on Reports or Certificates for Special Purposes, and in compliance with the ICAI Code of Ethics. I/we have also followed the relevant requirements of SQC 1 relating to quality control.",
        ctx.date
    ));

    heading(doc, "Opinion");
    doc.text(format!(
        "5. On the basis of the examination carried out and the information and explanations furnished to me/us, I/we certify that the annexed Statement of Net Worth of {} as at {} presents a Net Worth of \u{20b9}{}, derived from the records, representations and supporting documents provided by the individual.",
        ctx.individuals_phrase,
        ctx.date,
        format_amount(ctx.summary.net_worth_inr)
    ));

    heading(doc, "Restriction on Use");
    doc.text(format!(
        "6. This Certificate is prepared at the individual's request for submission to {} for VISA processing. It is restricted to this purpose only and is not intended for any other use. No responsibility or liability is accepted towards any person other than the specified addressee without my/our written consent.",
        data.embassy_name
    ));
    doc.blank();

    firm_block(doc, data, "FOR");
    doc.blank();
    doc.table(signature_table(data, &ctx.date));
    doc.blank();

    doc.text(format!(
        "Enclosure: Statement of Net Worth of {} as at {}",
        ctx.individuals_phrase, ctx.date
    ));
}

fn firm_block(doc: &mut Document, data: &NetWorthData, prefix: &str) {
    let preparer = &data.preparer;
    doc.paragraph(Paragraph::text(format!(
        "{} {}",
        prefix,
        preparer.firm_name.to_uppercase()
    )));
    doc.text("CHARTERED ACCOUNTANTS");
    doc.text(format!("FRN: {}", preparer.firm_registration_no));
}

fn signature_table(data: &NetWorthData, date: &str) -> Table {
    let preparer = &data.preparer;
    let mut table = Table::new(vec![
        preparer.signer_name.to_uppercase(),
        format!("DATE: {}", date),
    ]);
    table.bordered = false;
    table.push(vec![
        preparer.designation.to_uppercase(),
        format!("PLACE: {}", preparer.place.to_uppercase()),
    ]);
    table.push(vec![
        format!("MEMBERSHIP NO.: {}", preparer.membership_no),
        String::new(),
    ]);
    table.push(vec!["UDIN: [TO BE GENERATED]".to_string(), String::new()]);
    table
}

fn annexure_pages(doc: &mut Document, ctx: &Context<'_>) {
    let data = ctx.data;
    let summary = ctx.summary;

    doc.paragraph(
        Paragraph::text("Annexure - Statement of Net Worth")
            .bold()
            .align(Align::Center),
    );
    doc.blank();

    individuals_block(doc, data);
    doc.text(format!("Date of Certificate: {}", ctx.date));
    doc.text(format!(
        "Purpose: VISA Application - Submission to {}",
        data.embassy_name
    ));
    doc.blank();
    doc.paragraph(Paragraph::text(format!("Statement of Net Worth as at {}", ctx.date)).bold());

    doc.paragraph(
        Paragraph::text("SUMMARY - NET WORTH")
            .bold()
            .align(Align::Center),
    );
    doc.table(summary_table(summary));
    doc.blank();

    doc.paragraph(Paragraph::text("Annexure (i) - Movable Assets").bold());
    if summary.non_empty_movable().count() == 0 {
        doc.text("No movable assets to report.");
    } else {
        doc.table(movable_table(ctx));
    }

    for category in Category::ALL {
        if data.record_count(category) == 0 {
            continue;
        }
        doc.blank();
        doc.paragraph(Paragraph::text(category.annexure_heading()).bold());
        doc.table(itemized_for(category, ctx));
        if let Some(note) = data.notes.get(category) {
            doc.text(format!("Notes: {}", note));
        }
    }

    doc.blank();
    doc.paragraph(
        Paragraph::text(format!(
            "Net Worth: \u{20b9}{}",
            format_amount(summary.net_worth_inr)
        ))
        .bold(),
    );

    doc.blank();
    doc.text("Notes:");
    let mut notes = vec![
        "The above Statement is prepared based on details and supporting documents provided by the individual.".to_string(),
        "Valuation of assets is based on self-declaration / available records and has not been independently verified unless specified.".to_string(),
        format!(
            "This Annexure should be read with the Certificate dated {} issued by the undersigned.",
            ctx.date
        ),
    ];
    if data.liabilities.is_empty() {
        notes.push(
            "Loan documents and related confirmations were not made available for verification. As informed to us there is no liability as on the date.".to_string(),
        );
    }
    notes.push(
        "The information furnished in the Certificate does not certify any title or ownership.".to_string(),
    );
    for (i, note) in notes.iter().enumerate() {
        doc.text(format!("{}. {}", i + 1, note));
    }
    doc.blank();

    firm_block(doc, data, "FOR,");
}

fn individuals_block(doc: &mut Document, data: &NetWorthData) {
    match data.individuals.as_slice() {
        [] => {}
        [only] => {
            doc.text(format!("Name of Individual: {}", only.name_with_passport()));
            doc.text(format!(
                "Address: {}",
                only.address_text().unwrap_or_default()
            ));
        }
        many => {
            doc.text("Individuals:");
            for individual in many {
                doc.text(format!(" - {}", individual.name_with_passport()));
            }
            doc.text("Addresses:");
            for address in data.distinct_addresses() {
                doc.text(format!(" - {}", address));
            }
        }
    }
}

fn summary_table(summary: &NetWorthSummary) -> Table {
    let mut table = Table::new(vec![
        "Particulars".to_string(),
        "Estimated Market Value (INR)".to_string(),
        format!(
            "Estimated Market Value ({}@ {})",
            summary.foreign_currency, summary.exchange_rate
        ),
        "Annexure".to_string(),
    ]);
    table.push(vec![
        "Movable Assets".to_string(),
        format_amount(summary.total_movable_assets_inr),
        format_amount(summary.total_movable_assets_foreign),
        "(i)".to_string(),
    ]);
    table.push(vec![
        "Immovable Assets".to_string(),
        format_amount(summary.total_immovable_assets_inr),
        format_amount(summary.total_immovable_assets_foreign),
        "(ii)".to_string(),
    ]);
    let no_liabilities = summary.total_liabilities_inr == 0.0;
    table.push(vec![
        "Liabilities".to_string(),
        format_amount_or_dash(summary.total_liabilities_inr),
        if no_liabilities {
            "-".to_string()
        } else {
            format_amount(summary.total_liabilities_foreign)
        },
        "(iii)".to_string(),
    ]);
    table.push_bold(vec![
        "Total (i+ii-iii)".to_string(),
        format_amount(summary.net_worth_inr),
        format_amount(summary.net_worth_foreign),
        String::new(),
    ]);
    table
}

fn movable_table(ctx: &Context<'_>) -> Table {
    let summary = ctx.summary;
    let mut table = Table::new(vec![
        SERIAL_HEADER.to_string(),
        "Particulars".to_string(),
        "Sub-Annexure".to_string(),
        "Amount in INR".to_string(),
        ctx.foreign_header.clone(),
    ]);
    for (i, total) in summary.non_empty_movable().enumerate() {
        table.push(vec![
            (i + 1).to_string(),
            total.category.label().to_string(),
            total.category.sub_annexure().unwrap_or_default().to_string(),
            format_amount(total.total_inr),
            format_amount(total.total_foreign),
        ]);
    }
    table.push_bold(vec![
        String::new(),
        "Total".to_string(),
        String::new(),
        format_amount(summary.total_movable_assets_inr),
        format_amount(summary.total_movable_assets_foreign),
    ]);
    table
}

fn itemized_for(category: Category, ctx: &Context<'_>) -> Table {
    let data = ctx.data;
    match category {
        Category::BankAccounts => itemized(&data.bank_accounts, ctx),
        Category::InsurancePolicies => itemized(&data.insurance_policies, ctx),
        Category::PfAccounts => itemized(&data.pf_accounts, ctx),
        Category::Deposits => itemized(&data.deposits, ctx),
        Category::NpsAccounts => itemized(&data.nps_accounts, ctx),
        Category::MutualFunds => itemized(&data.mutual_funds, ctx),
        Category::Shares => itemized(&data.shares, ctx),
        Category::Vehicles => itemized(&data.vehicles, ctx),
        Category::PostOfficeSchemes => itemized(&data.post_office_schemes, ctx),
        Category::PartnershipFirms => itemized(&data.partnership_firms, ctx),
        Category::GoldHoldings => itemized(&data.gold_holdings, ctx),
        Category::Properties => itemized(&data.properties, ctx),
        Category::Liabilities => itemized(&data.liabilities, ctx),
    }
}

fn itemized<R: AnnexureColumns>(records: &[R], ctx: &Context<'_>) -> Table {
    let with_foreign = R::shows_foreign();
    let rate = ctx.summary.exchange_rate;

    let mut headers = vec![SERIAL_HEADER.to_string()];
    headers.extend(R::headers().iter().map(|h| h.to_string()));
    headers.push("Amount in INR".to_string());
    if with_foreign {
        headers.push(ctx.foreign_header.clone());
    }
    let mut table = Table::new(headers);

    for (i, record) in records.iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(record.cells());
        cells.push(format_amount(record.amount_inr()));
        if with_foreign {
            cells.push(format_amount(record.amount_foreign(rate)));
        }
        table.push(cells);
    }

    let total = ctx.summary.category(R::CATEGORY);
    let mut total_row = vec!["Total".to_string()];
    total_row.extend(R::headers().iter().map(|_| String::new()));
    total_row.push(format_amount(total.map(|t| t.total_inr).unwrap_or(0.0)));
    if with_foreign {
        total_row.push(format_amount(total.map(|t| t.total_foreign).unwrap_or(0.0)));
    }
    table.push_bold(total_row);
    table
}
