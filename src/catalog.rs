use rusqlite::{params, Connection, Row};
use thiserror::Error;
use tracing::debug;

use crate::model::{Category, ParseCategoryError, ResourceId, Word, WordList};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("word has no audio: {0}")]
    MissingAudio(String),
    #[error("resource id {id} of {term} collides with the no-resource marker")]
    ReservedResourceId { term: String, id: ResourceId },
}

impl From<ParseCategoryError> for CatalogError {
    fn from(err: ParseCategoryError) -> Self {
        match err {
            ParseCategoryError::UnknownCategory(key) => CatalogError::UnknownCategory(key),
        }
    }
}

const SELECT_WORDS: &str = "
    SELECT category, default_translation, miwok_translation, image_resource_id, audio_resource_id
    FROM words
";

pub fn create_schema(conn: &Connection) -> Result<(), CatalogError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS words (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            default_translation TEXT NOT NULL,
            miwok_translation TEXT NOT NULL,
            image_resource_id INTEGER,
            audio_resource_id INTEGER NOT NULL
        );",
    )?;
    Ok(())
}

/// Stores a word under `category` and returns its row id.
///
/// Handles equal to the legacy `-1` marker are refused, since `read_word`
/// would load them back as absent.
pub fn insert_word(
    conn: &Connection,
    category: Category,
    word: &Word,
) -> Result<i64, CatalogError> {
    let audio = word
        .audio_resource_id()
        .ok_or_else(|| CatalogError::MissingAudio(word.default_translation().to_string()))?;
    let reserved = word
        .image_resource_id()
        .into_iter()
        .chain([audio])
        .find(|id| id.is_reserved());
    if let Some(id) = reserved {
        return Err(CatalogError::ReservedResourceId {
            term: word.default_translation().to_string(),
            id,
        });
    }
    conn.execute(
        "INSERT INTO words (category, default_translation, miwok_translation, image_resource_id, audio_resource_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            category.key(),
            word.default_translation(),
            word.local_translation(),
            word.image_resource_id().map(ResourceId::get),
            audio.get(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    debug!(id, %category, term = word.default_translation(), "stored word");
    Ok(id)
}

/// Stores every word of the list in a single transaction.
pub fn insert_list(conn: &Connection, list: &WordList) -> Result<(), CatalogError> {
    let tx = conn.unchecked_transaction()?;
    for word in list {
        insert_word(&tx, list.category(), word)?;
    }
    tx.commit()?;
    debug!(category = %list.category(), count = list.len(), "stored word list");
    Ok(())
}

pub fn get_words(conn: &Connection, category: Category) -> Result<WordList, CatalogError> {
    let q = format!("{SELECT_WORDS} WHERE category = ?1 ORDER BY id ASC;");
    let mut stmt = conn.prepare(&q)?;
    let mut rows = stmt.query([category.key()])?;

    let mut list = WordList::new(category);
    while let Some(row) = rows.next()? {
        let (_, word) = read_word(row)?;
        list.push(word);
    }
    debug!(%category, count = list.len(), "loaded word list");
    Ok(list)
}

/// Loads one list per category, in `Category::all()` order.
pub fn get_all(conn: &Connection) -> Result<Vec<WordList>, CatalogError> {
    let q = format!("{SELECT_WORDS} ORDER BY id ASC;");
    let mut stmt = conn.prepare(&q)?;
    let mut rows = stmt.query([])?;

    let mut lists: Vec<WordList> = Category::all().into_iter().map(WordList::new).collect();
    while let Some(row) = rows.next()? {
        let (category, word) = read_word(row)?;
        if let Some(list) = lists.iter_mut().find(|l| l.category() == category) {
            list.push(word);
        }
    }
    Ok(lists)
}

fn read_word(row: &Row<'_>) -> Result<(Category, Word), CatalogError> {
    let key: String = row.get("category")?;
    let category = key.parse::<Category>()?;
    let default_translation: String = row.get("default_translation")?;
    let miwok_translation: String = row.get("miwok_translation")?;
    let image: Option<i32> = row.get("image_resource_id")?;
    let audio: i32 = row.get("audio_resource_id")?;

    // Older catalogs stored -1 instead of NULL.
    let image = image.and_then(ResourceId::from_raw);
    let audio = ResourceId::from_raw(audio)
        .ok_or_else(|| CatalogError::MissingAudio(default_translation.clone()))?;

    Ok((
        category,
        Word::from_parts(default_translation, miwok_translation, image, audio),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    fn colors() -> WordList {
        WordList::from_words(
            Category::Colors,
            vec![
                Word::with_image("red", "weṭeṭṭi", ResourceId::new(10), ResourceId::new(20)),
                Word::with_image("green", "chokokki", ResourceId::new(11), ResourceId::new(21)),
            ],
        )
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = setup_test_db();
        create_schema(&conn).unwrap();
    }

    #[test]
    fn test_insert_and_get_words() {
        let conn = setup_test_db();
        insert_list(&conn, &colors()).unwrap();
        let phrase = Word::new("Where are you going?", "minto wuksus", ResourceId::new(30));
        insert_word(&conn, Category::Phrases, &phrase).unwrap();

        assert_eq!(get_words(&conn, Category::Colors).unwrap(), colors());

        let phrases = get_words(&conn, Category::Phrases).unwrap();
        assert_eq!(phrases.words(), &[phrase]);
        assert!(!phrases.words()[0].has_image());
    }

    #[test]
    fn test_get_words_empty_category() {
        let conn = setup_test_db();
        let list = get_words(&conn, Category::Family).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.category(), Category::Family);
    }

    #[test]
    fn test_legacy_image_sentinel_loads_as_absent() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO words (category, default_translation, miwok_translation, image_resource_id, audio_resource_id)
             VALUES ('phrases', 'Yes, I''m coming.', 'hәә’ әәnәm', -1, 40)",
            [],
        )
        .unwrap();
        let list = get_words(&conn, Category::Phrases).unwrap();
        let word = list.get(0).unwrap();
        assert_eq!(word.image_resource_id(), None);
        assert_eq!(word.audio_resource_id(), Some(ResourceId::new(40)));
    }

    #[test]
    fn test_legacy_audio_sentinel_is_rejected() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO words (category, default_translation, miwok_translation, audio_resource_id)
             VALUES ('numbers', 'four', 'oyyisa', -1)",
            [],
        )
        .unwrap();
        let err = get_words(&conn, Category::Numbers).unwrap_err();
        assert!(matches!(err, CatalogError::MissingAudio(term) if term == "four"));
    }

    #[test]
    fn test_get_all_groups_by_category() {
        let conn = setup_test_db();
        insert_list(&conn, &colors()).unwrap();
        let one = Word::new("one", "lutti", ResourceId::new(1));
        insert_word(&conn, Category::Numbers, &one).unwrap();

        let lists = get_all(&conn).unwrap();
        let categories: Vec<_> = lists.iter().map(WordList::category).collect();
        assert_eq!(categories, Category::all().to_vec());
        let counts: Vec<_> = lists.iter().map(WordList::len).collect();
        assert_eq!(counts, vec![1, 0, 2, 0]);
    }

    #[test]
    fn test_reserved_image_id_is_refused() {
        let conn = setup_test_db();
        let cat = Word::with_image("cat", "pusi", ResourceId::new(-1), ResourceId::new(5));
        let err = insert_word(&conn, Category::Family, &cat).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ReservedResourceId { ref term, id } if term == "cat" && id.get() == -1
        ));
        assert!(get_words(&conn, Category::Family).unwrap().is_empty());
    }

    #[test]
    fn test_reserved_audio_id_keeps_catalog_readable() {
        let conn = setup_test_db();
        let one = Word::new("one", "lutti", ResourceId::new(1));
        insert_word(&conn, Category::Numbers, &one).unwrap();

        let two = Word::new("two", "otiiko", ResourceId::new(-1));
        let err = insert_word(&conn, Category::Numbers, &two).unwrap_err();
        assert!(matches!(err, CatalogError::ReservedResourceId { ref term, .. } if term == "two"));

        assert_eq!(get_words(&conn, Category::Numbers).unwrap().words(), &[one]);
        assert_eq!(get_all(&conn).unwrap()[0].len(), 1);
    }

    #[test]
    fn test_reserved_id_rolls_back_list() {
        let conn = setup_test_db();
        let list = WordList::from_words(
            Category::Colors,
            vec![
                Word::with_image("red", "weṭeṭṭi", ResourceId::new(10), ResourceId::new(20)),
                Word::with_image("black", "kululli", ResourceId::new(-1), ResourceId::new(22)),
            ],
        );
        assert!(insert_list(&conn, &list).is_err());
        assert!(get_words(&conn, Category::Colors).unwrap().is_empty());
    }

    #[test]
    fn test_get_all_unknown_category() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO words (category, default_translation, miwok_translation, audio_resource_id)
             VALUES ('animals', 'cat', 'pusi', 5)",
            [],
        )
        .unwrap();
        let err = get_all(&conn).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(key) if key == "animals"));
    }
}
