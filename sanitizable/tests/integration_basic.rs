//! End-to-end tests for the public sanitization API.
//!
//! These tests exercise the integration of:
//! - `Sanitize` derive traversal,
//! - the string pipeline applied at every leaf, and
//! - container traversal for common standard library types.

use std::collections::{BTreeMap, HashMap};

use sanitizable::{
    NotSanitized, Sanitizable, Sanitize, TextMapper, sanitize_string, sanitize_struct,
    sanitize_struct_with,
};

#[derive(Clone, Debug, PartialEq, Sanitize)]
struct Address {
    street: String,
    city: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Sanitize)]
struct Customer {
    name: String,
    age: u32,
    score: f64,
    active: bool,
    address: Option<Box<Address>>,
    tags: Vec<String>,
}

fn dirty_customer() -> Customer {
    Customer {
        name: "  Grace<script>steal()</script> ".to_string(),
        age: 85,
        score: 9.5,
        active: true,
        address: Some(Box::new(Address {
            street: "1 &amp; 2 Main St\0".to_string(),
            city: Some("<SCRIPT>\nx()\n</SCRIPT>Arlington".to_string()),
        })),
        tags: vec![" admiral ".to_string(), "&lt;cobol&gt;".to_string()],
    }
}

#[test]
fn nested_boxed_and_optional_records_are_cleaned_in_one_call() {
    let mut customer = dirty_customer();
    sanitize_struct(&mut customer);

    assert_eq!(customer.name, "Grace");
    let address = customer.address.as_deref().unwrap();
    assert_eq!(address.street, "1 & 2 Main St");
    assert_eq!(address.city.as_deref(), Some("Arlington"));
    assert_eq!(customer.tags, ["admiral", "<cobol>"]);
}

#[test]
fn non_string_fields_are_unchanged() {
    let mut customer = dirty_customer();
    sanitize_struct(&mut customer);

    assert_eq!(customer.age, 85);
    assert!((customer.score - 9.5).abs() < f64::EPSILON);
    assert!(customer.active);
}

#[test]
fn method_and_free_function_agree() {
    let mut via_method = dirty_customer();
    let mut via_function = dirty_customer();
    via_method.sanitize();
    sanitize_struct(&mut via_function);
    assert_eq!(via_method, via_function);
}

#[test]
fn sanitizing_twice_changes_nothing() {
    let mut customer = dirty_customer();
    sanitize_struct(&mut customer);
    let once = customer.clone();
    sanitize_struct(&mut customer);
    assert_eq!(customer, once);
}

#[test]
fn sequence_of_records_cleans_every_element() {
    let mut customers = vec![dirty_customer(), dirty_customer()];
    sanitize_struct(&mut customers);
    for customer in &customers {
        assert_eq!(customer.name, "Grace");
        assert_eq!(customer.tags, ["admiral", "<cobol>"]);
    }
}

#[test]
fn sequence_inside_a_record_cleans_records() {
    #[derive(Sanitize)]
    struct Team {
        members: Vec<Address>,
    }

    let mut team = Team {
        members: vec![Address {
            street: " Side Rd ".to_string(),
            city: None,
        }],
    };
    sanitize_struct(&mut team);
    assert_eq!(team.members[0].street, "Side Rd");
    assert!(team.members[0].city.is_none());
}

#[test]
fn string_map_values_are_cleaned() {
    #[derive(Sanitize)]
    struct Settings {
        labels: HashMap<String, String>,
    }

    let mut settings = Settings {
        labels: HashMap::from([
            ("title".to_string(), " <script>x</script>Home ".to_string()),
            ("footer".to_string(), "&quot;fine&quot; print".to_string()),
        ]),
    };
    sanitize_struct(&mut settings);
    assert_eq!(settings.labels["title"], "Home");
    assert_eq!(settings.labels["footer"], "\"fine\" print");
}

#[test]
fn record_map_values_are_left_alone() {
    #[derive(Sanitize)]
    struct Directory {
        entries: BTreeMap<String, Address>,
    }

    let original = Address {
        street: "  <script>x</script>kept  ".to_string(),
        city: Some(" kept ".to_string()),
    };
    let mut directory = Directory {
        entries: BTreeMap::from([("a".to_string(), original.clone())]),
    };
    sanitize_struct(&mut directory);
    assert_eq!(directory.entries["a"], original);
}

#[test]
fn absent_target_is_a_no_op() {
    let mut missing: Option<Customer> = None;
    sanitize_struct(&mut missing);
    assert!(missing.is_none());

    let mut missing_box: Option<Box<Address>> = None;
    missing_box.sanitize();
    assert!(missing_box.is_none());
}

#[test]
fn shared_reference_fields_are_not_mutated() {
    #[derive(Sanitize)]
    struct View<'a> {
        title: &'a String,
        note: String,
    }

    let title = "  shared  ".to_string();
    let mut view = View {
        title: &title,
        note: " owned ".to_string(),
    };
    sanitize_struct(&mut view);
    assert_eq!(view.title, "  shared  ");
    assert_eq!(view.note, "owned");
}

#[test]
fn mutable_reference_fields_are_cleaned() {
    #[derive(Sanitize)]
    struct Borrowing<'a> {
        target: &'a mut Address,
    }

    let mut address = Address {
        street: " 221b ".to_string(),
        city: None,
    };
    let mut borrowing = Borrowing {
        target: &mut address,
    };
    sanitize_struct(&mut borrowing);
    assert_eq!(address.street, "221b");
}

#[test]
fn not_sanitized_field_is_skipped() {
    #[derive(Sanitize)]
    struct Comment {
        body: String,
        #[not_sanitized]
        rendered_html: String,
    }

    let mut comment = Comment {
        body: " <b>hi</b> ".to_string(),
        rendered_html: " <script>trusted()</script> ".to_string(),
    };
    sanitize_struct(&mut comment);
    assert_eq!(comment.body, "<b>hi</b>");
    assert_eq!(comment.rendered_html, " <script>trusted()</script> ");
}

#[test]
fn not_sanitized_derive_is_a_no_op() {
    #[derive(Debug, PartialEq, NotSanitized)]
    struct Checksum(String);

    #[derive(Sanitize)]
    struct Upload {
        name: String,
        checksum: Checksum,
    }

    let mut upload = Upload {
        name: " file.txt ".to_string(),
        checksum: Checksum(" abc ".to_string()),
    };
    sanitize_struct(&mut upload);
    assert_eq!(upload.name, "file.txt");
    assert_eq!(upload.checksum, Checksum(" abc ".to_string()));
}

#[test]
fn enums_clean_the_active_variant() {
    #[derive(Debug, PartialEq, Sanitize)]
    enum Event {
        Created { title: String },
        Renamed(String, String),
        Deleted,
    }

    let mut created = Event::Created {
        title: " t ".to_string(),
    };
    created.sanitize();
    assert_eq!(
        created,
        Event::Created {
            title: "t".to_string()
        }
    );

    let mut renamed = Event::Renamed(" a ".to_string(), " b ".to_string());
    renamed.sanitize();
    assert_eq!(renamed, Event::Renamed("a".to_string(), "b".to_string()));

    let mut deleted = Event::Deleted;
    deleted.sanitize();
    assert_eq!(deleted, Event::Deleted);
}

#[test]
fn generic_records_walk_their_payload() {
    #[derive(Sanitize)]
    struct Envelope<T> {
        id: u64,
        payload: T,
    }

    let mut envelope = Envelope {
        id: 1,
        payload: vec![" x ".to_string()],
    };
    envelope.sanitize();
    assert_eq!(envelope.id, 1);
    assert_eq!(envelope.payload, ["x"]);
}

#[test]
fn custom_mapper_replaces_the_leaf_policy() {
    struct Shout;

    impl TextMapper for Shout {
        fn map_text(&self, input: &str) -> String {
            sanitize_string(input).to_uppercase()
        }
    }

    let mut customer = dirty_customer();
    sanitize_struct_with(&mut customer, &Shout);
    assert_eq!(customer.name, "GRACE");
    assert_eq!(customer.tags, ["ADMIRAL", "<COBOL>"]);
}
