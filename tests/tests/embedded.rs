use pretty_assertions::assert_eq;
use rowscan::{row, Api, Record, ValueRows};

#[derive(Debug, Default, PartialEq, Record)]
struct User {
    pub user_id: i64,
    pub email: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Post {
    pub post_id: i64,
    pub text: String,
    pub user_id: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
struct UserPost {
    #[db(embed)]
    user: User,
    #[db(embed)]
    post: Post,
}

fn columns<T: rowscan::Record>(api: &Api) -> Vec<(String, Vec<usize>)> {
    api.column_map::<T>()
        .unwrap()
        .iter()
        .map(|(column, path)| (column.to_string(), path.as_slice().to_vec()))
        .collect()
}

#[test]
fn first_embedded_record_claims_ambiguous_column() {
    let api = Api::new();

    assert_eq!(
        columns::<UserPost>(&api),
        [
            ("user_id".to_string(), vec![0, 0]),
            ("email".to_string(), vec![0, 1]),
            ("post_id".to_string(), vec![1, 0]),
            ("text".to_string(), vec![1, 1]),
        ]
    );

    let rows = ValueRows::new(
        ["user_id", "email", "post_id", "text"],
        vec![row![5, "ann@example.com", 7, "hello"]],
    );
    let user_post: UserPost = api.scan_one(rows).unwrap();

    assert_eq!(user_post.user.user_id, 5);
    assert_eq!(user_post.post.user_id, 0);
    assert_eq!(user_post.post.text, "hello");
}

#[test]
fn strict_columns_reject_ambiguity() {
    let api = Api::builder().strict_columns(true).build();
    let err = api.column_map::<UserPost>().unwrap_err();

    assert!(err.is_ambiguous_column());
    assert_eq!(
        err.to_string(),
        "column `user_id` is mapped by more than one field in UserPost"
    );
}

#[test]
fn embedded_prefix_tag() {
    #[derive(Debug, Default, Record)]
    struct Thread {
        pub id: i64,
        #[db("author", embed)]
        pub author: User,
    }

    assert_eq!(
        columns::<Thread>(&Api::new()),
        [
            ("id".to_string(), vec![0]),
            ("author.user_id".to_string(), vec![1, 0]),
            ("author.email".to_string(), vec![1, 1]),
        ]
    );
}

#[test]
fn outer_field_shadows_embedded_one() {
    #[derive(Debug, Default, Record)]
    struct Profile {
        #[db(embed)]
        user: User,
        pub email: String,
    }

    let rows = ValueRows::new(["user_id", "email"], vec![row![1, "outer@example.com"]]);
    let profile: Profile = Api::new().scan_one(rows).unwrap();

    assert_eq!(profile.email, "outer@example.com");
    assert_eq!(profile.user.email, "");
    assert_eq!(profile.user.user_id, 1);
}

#[derive(Debug, Default, PartialEq, Record)]
struct Comment {
    pub id: i64,
    #[db(nested)]
    pub author: Option<User>,
    #[db("reply_to", nested)]
    pub parent: Option<Box<Comment>>,
}

#[test]
fn nested_records_use_field_prefix() {
    assert_eq!(
        columns::<Comment>(&Api::new()),
        [
            ("id".to_string(), vec![0]),
            ("author".to_string(), vec![1]),
            ("reply_to".to_string(), vec![2]),
            ("author.user_id".to_string(), vec![1, 0]),
            ("author.email".to_string(), vec![1, 1]),
        ]
    );
}

#[test]
fn optional_nested_record_is_allocated_on_demand() {
    let api = Api::new();

    let rows = ValueRows::new(
        ["id", "author.email"],
        vec![row![1, "ann@example.com"], row![2, "bob@example.com"]],
    );
    let comments = api.scan_all::<Comment, Vec<_>>(rows).unwrap();

    assert_eq!(
        comments[1],
        Comment {
            id: 2,
            author: Some(User {
                user_id: 0,
                email: "bob@example.com".into(),
            }),
            parent: None,
        }
    );

    let rows = ValueRows::new(["id"], vec![row![3]]);
    let comment: Comment = api.scan_one(rows).unwrap();
    assert_eq!(comment.author, None);
}

#[test]
fn column_naming_a_nested_record_is_invalid() {
    let rows = ValueRows::new(["id", "author"], vec![row![1, "ann"]]);
    let err = Api::new().scan_one::<Comment>(rows).unwrap_err();
    assert!(err.is_invalid_destination());
}

#[derive(Debug, Default, PartialEq, Record)]
struct Session {
    pub token: String,
    #[db(embed)]
    pub user: Option<User>,
}

#[test]
fn optional_embedded_record_takes_unprefixed_columns() {
    let api = Api::new();

    assert_eq!(
        columns::<Session>(&api),
        [
            ("token".to_string(), vec![0]),
            ("user_id".to_string(), vec![1, 0]),
            ("email".to_string(), vec![1, 1]),
        ]
    );

    let rows = ValueRows::new(
        ["token", "user_id", "email"],
        vec![row!["abc", 9, "ann@example.com"]],
    );
    let session: Session = api.scan_one(rows).unwrap();
    assert_eq!(
        session,
        Session {
            token: "abc".into(),
            user: Some(User {
                user_id: 9,
                email: "ann@example.com".into(),
            }),
        }
    );

    let rows = ValueRows::new(["token"], vec![row!["def"]]);
    let session: Session = api.scan_one(rows).unwrap();
    assert_eq!(session.user, None);
}
