use pretty_assertions::assert_eq;
use rowscan::{row, Api, Record, ValueRows};

fn columns<T: rowscan::Record>(api: &Api) -> Vec<String> {
    api.column_map::<T>()
        .unwrap()
        .columns()
        .map(str::to_string)
        .collect()
}

#[test]
fn mixed_case_fields_become_snake_case_columns() {
    #[derive(Debug, Default, Record)]
    #[allow(non_snake_case)]
    struct Person {
        pub FirstName: String,
        pub UserID: i64,
        pub HTTPStatus: i64,
    }

    assert_eq!(
        columns::<Person>(&Api::new()),
        ["first_name", "user_id", "http_status"]
    );
}

#[test]
fn tag_overrides_field_name() {
    #[derive(Debug, Default, Record)]
    struct Account {
        #[db("account_id")]
        pub id: i64,
        pub r#type: String,
    }

    let api = Api::new();
    assert_eq!(columns::<Account>(&api), ["account_id", "type"]);

    let rows = ValueRows::new(["type", "account_id"], vec![row!["admin", 9]]);
    let account: Account = api.scan_one(rows).unwrap();
    assert_eq!(account.id, 9);
    assert_eq!(account.r#type, "admin");
}

#[test]
fn custom_name_mapper_and_separator() {
    #[derive(Debug, Default, Record)]
    struct Address {
        pub city: String,
    }

    #[derive(Debug, Default, Record)]
    struct Customer {
        pub name: String,
        #[db(nested)]
        pub address: Address,
    }

    let api = Api::builder()
        .name_mapper(|name| name.to_uppercase())
        .column_separator("__")
        .build();

    assert_eq!(
        columns::<Customer>(&api),
        ["NAME", "ADDRESS", "ADDRESS__CITY"]
    );
}
