use std::{collections::HashMap, io::Write};

use crate::domain::account::{Account, AccountId};

#[derive(serde::Serialize)]
/// Internal CSV output row: `id,name,balance`.
struct OutputRow<'a> {
    id: AccountId,
    name: &'a str,
    balance: i64,
}

/// Writes the closing account balances to a CSV writer.
///
/// The output includes a header row `id,name,balance`, and accounts are
/// sorted by id ascending.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use atm_sim::domain::{account::AccountSpec, ledger::Ledger};
/// use atm_sim::io::writer::write_accounts;
///
/// let ledger = Ledger::from_specs(vec![
///     AccountSpec::new("Bob", 2, 5),
///     AccountSpec::new("Alice", 1, 100),
/// ])
/// .unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "id,name,balance\n1,Alice,100\n2,Bob,5\n");
/// ```
pub fn write_accounts<W: Write>(
    writer: W,
    accounts: &HashMap<AccountId, Account>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut sorted: Vec<&Account> = accounts.values().collect();
    sorted.sort_unstable_by_key(|acc| acc.id());

    for acc in sorted {
        wtr.serialize(OutputRow {
            id: acc.id(),
            name: acc.name(),
            balance: acc.balance().as_i64(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::Money,
        domain::{account::AccountSpec, ledger::Ledger},
    };

    fn write_to_string(ledger: &Ledger) -> String {
        let mut out = Vec::new();
        write_accounts(&mut out, ledger.accounts()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_sorted_id_order() {
        let ledger = Ledger::from_specs(vec![
            AccountSpec::new("Zed", 30, 1),
            AccountSpec::new("Amy", 4, 2),
            AccountSpec::new("Kim", 12, 3),
        ])
        .unwrap();

        let s = write_to_string(&ledger);
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines, ["id,name,balance", "4,Amy,2", "12,Kim,3", "30,Zed,1"]);
    }

    #[test]
    fn writes_current_balances_and_quotes_names_when_needed() {
        let mut ledger = Ledger::from_specs(vec![AccountSpec::new("Doe, Jane", 1, 100)]).unwrap();
        ledger.update_balance(1, Money::new(-50)).unwrap();

        let s = write_to_string(&ledger);
        assert_eq!(s.lines().nth(1), Some("1,\"Doe, Jane\",-50"));
    }
}
