use crate::ledger::{
    money::{self, MoneyError},
    Amount, ExpenseCategory, ExpenseId, Member, MemberId, Settlement,
};

use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("malformed CSV: {0}")]
    Csv(String),

    #[error("invalid record: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        Self::Format(err.to_string())
    }
}

/// Why a well-formed CSV row doesn't describe a valid ledger record.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("missing {field} for {kind}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Amount(#[from] MoneyError),
}

/// One line of the ledger, once validated.
#[derive(Debug, PartialEq)]
pub enum Record {
    Group {
        id: String,
        name: String,
    },
    Member(Member),
    Expense {
        id: ExpenseId,
        payer_id: MemberId,
        amount: Amount,
        category: ExpenseCategory,
        description: String,
    },
    /// An explicit share of an expense.
    Share {
        expense_id: ExpenseId,
        member_id: MemberId,
        share: Amount,
    },
    /// A participant of an expense split equally.
    Split {
        expense_id: ExpenseId,
        member_id: MemberId,
    },
    Settlement(Settlement),
}

// Bad rows don't abort the whole ledger: each one is reported on the error
// channel and the remaining rows are still read.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Record>, Receiver<Error>) {
    let (record_tx, record_rx): (Sender<Record>, Receiver<Record>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so the group can be assembled while we read.
    std::thread::spawn(move || {
        for row in reader.deserialize::<LedgerRow>() {
            // Sending only fails once the receiving side is gone, in which
            // case nobody is interested in the rest of the input anyway.
            let sent = match convert(row) {
                Ok(record) => record_tx.send(record).is_ok(),
                Err(err) => error_tx.send(err).is_ok(),
            };
            if !sent {
                break;
            }
        }
    });

    (record_rx, error_rx)
}

// Convert from a csv deserialise result into a record result.
fn convert(row: Result<LedgerRow, csv::Error>) -> Result<Record, Error> {
    Ok(row?.try_into()?)
}

// LedgerRow mirrors the CSV layout. Every row kind uses a different subset of
// the columns, so all of them are optional here and `Record` is only built
// once we know which ones are required.
#[derive(Debug, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "type")]
    kind: RowKind,

    id: Option<String>,
    member: Option<String>,
    counterpart: Option<String>,
    amount: Option<Decimal>,
    category: Option<ExpenseCategory>,
    description: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Group,
    Member,
    Expense,
    Share,
    Split,
    Settlement,
}

impl RowKind {
    fn name(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Member => "member",
            Self::Expense => "expense",
            Self::Share => "share",
            Self::Split => "split",
            Self::Settlement => "settlement",
        }
    }
}

impl LedgerRow {
    fn required<T>(&self, value: Option<T>, field: &'static str) -> Result<T, RecordError> {
        value.ok_or(RecordError::MissingField {
            kind: self.kind.name(),
            field,
        })
    }

    fn required_amount(&self) -> Result<Amount, RecordError> {
        Ok(money::to_minor_units(self.required(self.amount, "amount")?)?)
    }
}

impl TryFrom<LedgerRow> for Record {
    type Error = RecordError;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        let id = row.required(row.id.clone(), "id")?;

        let record = match row.kind {
            RowKind::Group => Record::Group {
                name: row.description.unwrap_or_default(),
                id,
            },
            RowKind::Member => {
                let name = row.description.unwrap_or_else(|| id.clone());
                Record::Member(Member::new(id, name))
            }
            RowKind::Expense => Record::Expense {
                payer_id: row.required(row.member.clone(), "payer")?,
                amount: row.required_amount()?,
                category: row.category.unwrap_or_default(),
                description: row.description.unwrap_or_default(),
                id,
            },
            RowKind::Share => Record::Share {
                member_id: row.required(row.member.clone(), "participant")?,
                share: row.required_amount()?,
                expense_id: id,
            },
            RowKind::Split => Record::Split {
                member_id: row.required(row.member.clone(), "participant")?,
                expense_id: id,
            },
            RowKind::Settlement => Record::Settlement(Settlement::new(
                id,
                row.required(row.member.clone(), "sender")?,
                row.required(row.counterpart.clone(), "receiver")?,
                row.required_amount()?,
            )),
        };

        Ok(record)
    }
}
