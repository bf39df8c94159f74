//! Tests for standard container traversal behavior.

use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    rc::Rc,
    sync::{Arc, Mutex, RwLock},
};

use crate::{Sanitizable, Sanitize};

#[derive(Clone, Debug, PartialEq, Sanitize)]
struct Note {
    text: String,
}

fn note(text: &str) -> Note {
    Note {
        text: text.to_string(),
    }
}

#[test]
fn string_leaf_is_cleaned() {
    let mut value = " <script>x</script>hi ".to_string();
    value.sanitize();
    assert_eq!(value, "hi");
}

#[test]
fn boxed_str_and_cow_are_cleaned() {
    let mut boxed: Box<str> = " boxed ".into();
    boxed.sanitize();
    assert_eq!(&*boxed, "boxed");

    let mut borrowed: Cow<'_, str> = Cow::Borrowed("clean");
    borrowed.sanitize();
    assert!(matches!(borrowed, Cow::Borrowed("clean")));

    let mut dirty: Cow<'_, str> = Cow::Borrowed(" &amp; ");
    dirty.sanitize();
    assert_eq!(dirty, "&");
}

#[test]
fn scalars_are_unchanged() {
    let mut number = 42_i64;
    let mut flag = true;
    let mut ch = '<';
    number.sanitize();
    flag.sanitize();
    ch.sanitize();
    assert_eq!((number, flag, ch), (42, true, '<'));
}

#[test]
fn option_some_is_cleaned_and_none_is_left_alone() {
    let mut some = Some(note(" a "));
    some.sanitize();
    assert_eq!(some, Some(note("a")));

    let mut none: Option<Note> = None;
    none.sanitize();
    assert!(none.is_none());
}

#[test]
fn box_and_result_forward_to_inner() {
    let mut boxed = Box::new(note(" b "));
    boxed.sanitize();
    assert_eq!(boxed.text, "b");

    let mut ok: Result<Note, Note> = Ok(note(" ok "));
    ok.sanitize();
    assert_eq!(ok, Ok(note("ok")));

    let mut err: Result<Note, Note> = Err(note(" err "));
    err.sanitize();
    assert_eq!(err, Err(note("err")));
}

#[test]
fn sequences_clean_every_element() {
    let mut vec = vec![note(" 1 "), note(" 2 ")];
    vec.sanitize();
    assert_eq!(vec, vec![note("1"), note("2")]);

    let mut array = [" x ".to_string(), " y ".to_string()];
    array.sanitize();
    assert_eq!(array, ["x".to_string(), "y".to_string()]);

    let mut deque: VecDeque<String> = VecDeque::from([" d ".to_string()]);
    deque.sanitize();
    assert_eq!(deque[0], "d");

    let mut list: LinkedList<String> = LinkedList::from([" l ".to_string()]);
    list.sanitize();
    assert_eq!(list.front().map(String::as_str), Some("l"));
}

#[test]
fn slices_are_cleaned_through_mutable_borrow() {
    let mut items = vec![" s ".to_string()];
    let slice: &mut [String] = &mut items;
    slice.sanitize();
    assert_eq!(items, ["s"]);
}

#[test]
fn tuples_clean_each_position() {
    let mut pair = (" a ".to_string(), 7_u8, note(" c "));
    pair.sanitize();
    assert_eq!(pair, ("a".to_string(), 7, note("c")));
}

#[test]
fn string_map_values_are_cleaned_keys_untouched() {
    let mut map: HashMap<String, String> = HashMap::new();
    map.insert(" key ".to_string(), " value ".to_string());
    map.sanitize();
    assert_eq!(map.get(" key ").map(String::as_str), Some("value"));

    let mut ordered: BTreeMap<u32, String> = BTreeMap::new();
    ordered.insert(1, "&lt;i&gt;".to_string());
    ordered.sanitize();
    assert_eq!(ordered[&1], "<i>");
}

#[test]
fn non_string_map_values_are_untouched() {
    let mut records: HashMap<String, Note> = HashMap::new();
    records.insert("k".to_string(), note(" padded "));
    records.sanitize();
    assert_eq!(records["k"], note(" padded "));

    let mut optional: BTreeMap<String, Option<String>> = BTreeMap::new();
    optional.insert("k".to_string(), Some(" padded ".to_string()));
    optional.sanitize();
    assert_eq!(optional["k"].as_deref(), Some(" padded "));

    let mut nested: HashMap<String, Vec<String>> = HashMap::new();
    nested.insert("k".to_string(), vec![" padded ".to_string()]);
    nested.sanitize();
    assert_eq!(nested["k"], [" padded "]);
}

#[test]
fn sets_are_rebuilt_and_collapse_duplicates() {
    let mut set: HashSet<String> = [" a ".to_string(), "a".to_string()].into_iter().collect();
    set.sanitize();
    assert_eq!(set.len(), 1);
    assert!(set.contains("a"));

    let mut ordered: BTreeSet<String> = [" b ".to_string(), "&amp;".to_string()]
        .into_iter()
        .collect();
    ordered.sanitize();
    assert_eq!(
        ordered.into_iter().collect::<Vec<_>>(),
        vec!["&".to_string(), "b".to_string()]
    );
}

#[test]
fn unique_rc_and_arc_are_cleaned() {
    let mut rc = Rc::new(note(" rc "));
    rc.sanitize();
    assert_eq!(rc.text, "rc");

    let mut arc = Arc::new(note(" arc "));
    arc.sanitize();
    assert_eq!(arc.text, "arc");
}

#[test]
fn shared_rc_and_arc_are_skipped() {
    let mut rc = Rc::new(note(" rc "));
    let other = Rc::clone(&rc);
    rc.sanitize();
    assert_eq!(other.text, " rc ");

    let mut arc = Arc::new(note(" arc "));
    let other = Arc::clone(&arc);
    arc.sanitize();
    assert_eq!(other.text, " arc ");
}

#[test]
fn shared_reference_is_skipped() {
    let original = note(" shared ");
    let mut reference = &original;
    reference.sanitize();
    assert_eq!(original.text, " shared ");
}

#[test]
fn mutable_reference_forwards() {
    let mut original = note(" owned ");
    let reference = &mut original;
    reference.sanitize();
    assert_eq!(original.text, "owned");
}

#[test]
fn cells_and_locks_are_cleaned_through_get_mut() {
    let mut cell = RefCell::new(note(" r "));
    cell.sanitize();
    assert_eq!(cell.borrow().text, "r");

    let mut plain = Cell::new(5_u32);
    plain.sanitize();
    assert_eq!(plain.get(), 5);

    let mut mutex = Mutex::new(note(" m "));
    mutex.sanitize();
    assert_eq!(mutex.get_mut().unwrap().text, "m");

    let mut lock = RwLock::new(note(" w "));
    lock.sanitize();
    assert_eq!(lock.get_mut().unwrap().text, "w");
}

#[test]
fn poisoned_mutex_is_skipped() {
    let mutex = Arc::new(Mutex::new(note(" p ")));
    let handle = Arc::clone(&mutex);
    let _ = std::thread::spawn(move || {
        let _guard = handle.lock().unwrap();
        panic!("poison the lock");
    })
    .join();

    let mut mutex = Arc::try_unwrap(mutex).unwrap();
    assert!(mutex.is_poisoned());
    mutex.sanitize();
    let text = match mutex.get_mut() {
        Ok(inner) => inner.text.clone(),
        Err(poisoned) => poisoned.into_inner().text.clone(),
    };
    assert_eq!(text, " p ");
}
