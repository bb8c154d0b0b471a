use bookshelf_core::{
    parse_date, year, Book, BookListViewModel, BookRepository, BookRowViewData,
    FixedBookRepository,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct StubBookRepository {
    get_count: Cell<usize>,
}

impl BookRepository for StubBookRepository {
    fn get(&self) -> Vec<Book> {
        self.get_count.set(self.get_count.get() + 1);
        vec![Book::parse(
            "0804139296",
            "Zero to One",
            ["Peter Thiel", "Blake Masters"],
            224,
            "04/06/2015",
        )
        .unwrap()]
    }
}

fn record_rows<R: BookRepository>(
    view_model: &mut BookListViewModel<R>,
) -> Rc<RefCell<Vec<Vec<BookRowViewData>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    view_model.subscribe(move |rows| sink.borrow_mut().push(rows.clone()));
    seen
}

#[test]
fn fetch_books_publishes_expected_view_data() {
    let mut view_model = BookListViewModel::new(StubBookRepository::default());

    view_model.fetch_books();

    let expected = vec![BookRowViewData {
        id: "0804139296".to_string(),
        title: "Zero to One".to_string(),
        subtitle: "Peter Thiel, Blake Masters ⚬ 2015".to_string(),
    }];
    assert_eq!(view_model.books(), expected.as_slice());
    assert_eq!(view_model.repository().get_count.get(), 1);
}

#[test]
fn rows_are_empty_before_fetch() {
    let view_model = BookListViewModel::new(StubBookRepository::default());
    assert!(view_model.books().is_empty());
    assert_eq!(view_model.repository().get_count.get(), 0);
}

#[test]
fn subscriber_sees_empty_then_fetched_rows() {
    let mut view_model = BookListViewModel::new(FixedBookRepository::catalog());
    let seen = record_rows(&mut view_model);

    view_model.fetch_books();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_empty());
    assert_eq!(seen[1].len(), 2);
}

#[test]
fn late_subscriber_receives_current_rows() {
    let mut view_model = BookListViewModel::new(FixedBookRepository::catalog());
    view_model.fetch_books();

    let seen = record_rows(&mut view_model);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], view_model.books());
}

#[test]
fn refetch_with_equal_rows_does_not_renotify() {
    let mut view_model = BookListViewModel::new(StubBookRepository::default());
    let seen = record_rows(&mut view_model);

    view_model.fetch_books();
    view_model.fetch_books();

    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(view_model.repository().get_count.get(), 2);
}

#[test]
fn unsubscribed_observer_is_not_notified() {
    let mut view_model = BookListViewModel::new(FixedBookRepository::catalog());
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let id = view_model.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(view_model.unsubscribe(id));
    view_model.fetch_books();

    assert_eq!(notified.get(), 1);
}

#[test]
fn rows_map_every_catalog_book_in_order() {
    let repo = FixedBookRepository::catalog();
    let books = repo.get();
    let mut view_model = BookListViewModel::new(&repo);

    view_model.fetch_books();

    let rows = view_model.books();
    assert_eq!(rows.len(), books.len());
    for (row, book) in rows.iter().zip(books.iter()) {
        assert_eq!(row.id, book.isbn);
        assert_eq!(row.title, book.title);
        assert_eq!(
            row.subtitle,
            format!(
                "{} ⚬ {}",
                book.authors.join(", "),
                year(&book.publication_date)
            )
        );
    }
}

#[test]
fn catalog_rows_match_fixed_display_strings() {
    let mut view_model = BookListViewModel::new(FixedBookRepository::catalog());
    view_model.fetch_books();

    let subtitles = view_model
        .books()
        .iter()
        .map(|row| row.subtitle.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        subtitles,
        vec!["Peter Thiel, Blake Masters ⚬ 2015", "Eric Ries ⚬ 2011"]
    );
}

#[test]
fn row_serialization_uses_view_field_names() {
    let book = Book::new(
        "0307887898",
        "The Lean Startup",
        ["Eric Ries"],
        336,
        parse_date("06/10/2011").unwrap(),
    );
    let row = BookRowViewData::from(&book);

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "0307887898",
            "title": "The Lean Startup",
            "subtitle": "Eric Ries ⚬ 2011"
        })
    );
}
