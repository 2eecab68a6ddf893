use crate::{
    common::money::Money,
    domain::account::{AccountId, AccountSpec},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the accounts file headers.
struct CsvRow {
    name: String,
    id: AccountId,
    balance: String,
}

/// Reads and validates account specs from a CSV reader.
///
/// Supported headers: `name,id,balance`. Balances must be whole integers;
/// errors include the account id for context. Duplicate ids are not detected
/// here, that is the ledger's job.
///
/// # Examples
///
/// ```
/// use atm_sim::io::reader::read_account_specs;
/// use csv::ReaderBuilder;
///
/// let data = "name,id,balance\n\
/// Alice,1,100\n\
/// Bob,2,0\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let specs: Vec<_> = read_account_specs(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(specs[0].name, "Alice");
/// assert_eq!(specs[1].id, 2);
/// ```
pub fn read_account_specs<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<AccountSpec, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let name = row.name.trim();
        if name.is_empty() {
            return Err(format!("account {} has an empty name", row.id));
        }

        let balance = Money::from_str(&row.balance)
            .map_err(|e| format!("invalid balance {:?} for account {}: {e}", row.balance, row.id))?;

        Ok(AccountSpec {
            name: name.to_owned(),
            id: row.id,
            balance,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    // Helper: parse CSV input into collected specs for assertions.
    fn collect_specs(input: &str) -> Vec<Result<AccountSpec, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());
        read_account_specs(&mut reader).collect()
    }

    #[test]
    fn parses_accounts_with_signed_balances() {
        let data = "name,id,balance\nAlice,1,100\n Bob , 2 , -25 \n";
        let specs = collect_specs(data);

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0], Ok(AccountSpec::new("Alice", 1, 100)));
        assert_eq!(specs[1], Ok(AccountSpec::new("Bob", 2, -25)));
    }

    #[test]
    fn reports_invalid_balance() {
        let data = "name,id,balance\nAlice,1,12.50\n";
        let specs = collect_specs(data);

        let err = specs.into_iter().next().unwrap().unwrap_err();
        assert!(
            err.starts_with("invalid balance \"12.50\" for account 1"),
            "got {err}"
        );
    }

    #[test]
    fn reports_empty_name() {
        let data = "name,id,balance\n,3,10\n";
        let specs = collect_specs(data);

        let err = specs.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "account 3 has an empty name");
    }

    #[test]
    fn reports_non_numeric_id() {
        let data = "name,id,balance\nAlice,one,10\n";
        let specs = collect_specs(data);

        assert!(specs[0].is_err());
    }
}
