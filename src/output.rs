use crate::ledger::{money, Balance, BalanceStatus, MemberId, SimplifiedTransaction};

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
struct BalanceRecord<'a> {
    #[serde(rename = "member")]
    member_id: &'a MemberId,

    name: &'a str,

    balance: Decimal,

    status: &'static str,
}

impl<'a> BalanceRecord<'a> {
    fn new(balance: &'a Balance) -> Self {
        Self {
            member_id: &balance.member_id,
            name: &balance.name,
            balance: money::to_major_units(balance.balance),
            status: match balance.status() {
                BalanceStatus::Owed => "owed",
                BalanceStatus::Owes => "owes",
                BalanceStatus::Settled => "settled",
            },
        }
    }
}

#[derive(Serialize)]
struct TransactionRecord<'a> {
    from: &'a MemberId,
    to: &'a MemberId,
    amount: Decimal,
}

impl<'a> TransactionRecord<'a> {
    fn new(tx: &'a SimplifiedTransaction) -> Self {
        Self {
            from: &tx.from.id,
            to: &tx.to.id,
            amount: money::to_major_units(tx.amount),
        }
    }
}

/// Writes one row per member balance to the given stream.
pub fn write_balances(
    output_stream: impl std::io::Write,
    balances: &[Balance],
) -> Result<(), std::io::Error> {
    write_rows(
        output_stream,
        &["member", "name", "balance", "status"],
        balances.iter().map(BalanceRecord::new),
    )
}

/// Writes one row per suggested payment to the given stream.
pub fn write_transactions(
    output_stream: impl std::io::Write,
    transactions: &[SimplifiedTransaction],
) -> Result<(), std::io::Error> {
    write_rows(
        output_stream,
        &["from", "to", "amount"],
        transactions.iter().map(TransactionRecord::new),
    )
}

fn write_rows<R: Serialize>(
    output_stream: impl std::io::Write,
    header: &[&str],
    rows: impl Iterator<Item = R>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    // csv only writes headers along with the first serialized row.
    let mut rows = rows.peekable();
    if rows.peek().is_none() {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
