//! End-to-end export tests over an in-memory repository.

use chrono::{NaiveDate, NaiveDateTime};
use media_export_core::{
    ExportOptions, InMemoryRepository, MediaRepository, UTF8_BOM, resolve_default_category,
    run_export_at,
};
use media_export_model::{
    Category, CategoryId, EntryId, ExclusionSet, MediaId, MediaItem, MediaKind,
};

const UNCATEGORIZED: CategoryId = CategoryId::new(1);
const ANIMALS: CategoryId = CategoryId::new(2);
const RECIPES: CategoryId = CategoryId::new(3);

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(14, 3, 0))
        .expect("valid timestamp")
}

fn upload(id: u64, title: &str, file: &str) -> MediaItem {
    MediaItem::new(
        MediaId::new(id),
        file,
        format!("https://example.org/wp-content/uploads/{file}"),
    )
    .with_title(title)
    .with_mime_type("image/png")
}

fn library() -> InMemoryRepository {
    InMemoryRepository::new()
        .with_category(Category::new(UNCATEGORIZED, "Non classé", "uncategorized"))
        .with_category(Category::new(ANIMALS, "Animaux", "animaux"))
        .with_category(Category::new(RECIPES, "Recettes", "recettes"))
        .with_category(Category::new(CategoryId::new(4), "Chats", "chats").with_parent(ANIMALS))
        .with_entry(EntryId::new(10), vec![ANIMALS])
        .with_entry(EntryId::new(11), vec![RECIPES])
        .with_entry(EntryId::new(12), vec![UNCATEGORIZED])
        .with_media(
            upload(101, "Chat noir", "2024/05/chat-noir.png").with_parent(EntryId::new(10)),
            vec![],
        )
        .with_media(
            upload(102, "Tarte; pommes", "2024/06/tarte.jpg").with_parent(EntryId::new(11)),
            vec![],
        )
        .with_media(upload(103, "", "logo.svg"), vec![UNCATEGORIZED])
        .with_media(
            upload(104, "Affiche", "2023/01/affiche.pdf").with_mime_type("application/pdf"),
            vec![UNCATEGORIZED, RECIPES],
        )
        .with_media(
            upload(105, "Divers", "misc/divers.png").with_parent(EntryId::new(12)),
            vec![],
        )
}

fn body(bytes: &[u8]) -> &str {
    assert_eq!(&bytes[..3], UTF8_BOM, "document must start with a BOM");
    std::str::from_utf8(&bytes[3..]).expect("utf8 body")
}

fn ids(text: &str) -> Vec<&str> {
    text.lines()
        .skip(1)
        .map(|line| line.split(';').next().unwrap_or_default())
        .collect()
}

#[test]
fn parent_category_excludes_child_media() {
    let outcome = run_export_at(
        &library(),
        &ExclusionSet::from([ANIMALS]),
        &ExportOptions::default(),
        generated_at(),
    )
    .expect("export");
    let text = body(&outcome.document.bytes);
    assert!(text.starts_with("ID;Titre;Nom du fichier;URL\n"));
    assert_eq!(ids(text), vec!["102", "103", "104", "105"]);
    assert_eq!(outcome.stats.excluded_by_parent, 1);
    assert_eq!(outcome.stats.excluded_by_own, 0);
}

#[test]
fn uncategorized_exclusion_document() {
    let outcome = run_export_at(
        &library(),
        &ExclusionSet::from([UNCATEGORIZED]),
        &ExportOptions::default(),
        generated_at(),
    )
    .expect("export");
    insta::assert_snapshot!(body(&outcome.document.bytes).trim_end(), @r#"
    ID;Titre;Nom du fichier;URL
    101;Chat noir;chat-noir.png;https://example.org/wp-content/uploads/2024/05/chat-noir.png
    102;"Tarte; pommes";tarte.jpg;https://example.org/wp-content/uploads/2024/06/tarte.jpg
    103;;logo.svg;https://example.org/wp-content/uploads/logo.svg
    "#);
    assert_eq!(outcome.stats.excluded_by_own, 1);
    assert_eq!(outcome.stats.excluded_by_parent, 1);
    assert_eq!(outcome.default_category, UNCATEGORIZED);
}

#[test]
fn row_count_matches_survivors() {
    for excluded in [
        ExclusionSet::new(),
        ExclusionSet::from([ANIMALS]),
        ExclusionSet::from([UNCATEGORIZED, RECIPES]),
        ExclusionSet::from([UNCATEGORIZED, ANIMALS, RECIPES]),
    ] {
        let outcome =
            run_export_at(&library(), &excluded, &ExportOptions::default(), generated_at())
                .expect("export");
        let stats = outcome.stats;
        assert_eq!(stats.candidates, 5);
        assert_eq!(stats.written, stats.candidates - stats.excluded());
        assert_eq!(outcome.document.row_count, stats.written);
        assert_eq!(body(&outcome.document.bytes).lines().count(), 1 + stats.written);
    }
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let excluded = ExclusionSet::from([RECIPES]);
    let first = run_export_at(&library(), &excluded, &ExportOptions::default(), generated_at())
        .expect("export");
    let second = run_export_at(&library(), &excluded, &ExportOptions::default(), generated_at())
        .expect("export");
    assert_eq!(first.document, second.document);
    assert_eq!(first.document.filename, "export-medias-2024-06-01-14-03.csv");
}

#[test]
fn filename_column_has_no_separator() {
    let outcome = run_export_at(
        &library(),
        &ExclusionSet::new(),
        &ExportOptions::default(),
        generated_at(),
    )
    .expect("export");
    let text = body(&outcome.document.bytes);
    for line in text.lines().skip(1) {
        let filename = line.rsplitn(2, ";https://").nth(1).and_then(|head| head.rsplit(';').next());
        let filename = filename.expect("filename column");
        assert!(!filename.contains('/') && !filename.contains('\\'), "{filename}");
    }
}

#[test]
fn kind_filter_limits_candidates() {
    let options = ExportOptions::default().with_kind(MediaKind::Document);
    let outcome =
        run_export_at(&library(), &ExclusionSet::new(), &options, generated_at()).expect("export");
    assert_eq!(outcome.stats.candidates, 1);
    assert_eq!(ids(body(&outcome.document.bytes)), vec!["104"]);
}

#[test]
fn default_category_falls_back_when_slug_unknown() {
    let options = ExportOptions::default().with_default_slug("sans-categorie");
    assert_eq!(resolve_default_category(&library(), &options), UNCATEGORIZED);

    let recipes_default = ExportOptions::default().with_default_slug("recettes");
    assert_eq!(resolve_default_category(&library(), &recipes_default), RECIPES);
}

/// Lists an id it cannot describe.
struct Sparse;

impl MediaRepository for Sparse {
    fn media_ids(&self, _kind: MediaKind) -> Vec<MediaId> {
        vec![MediaId::new(7)]
    }

    fn media_item(&self, _id: MediaId) -> Option<MediaItem> {
        None
    }

    fn media_categories(&self, _id: MediaId) -> Vec<CategoryId> {
        Vec::new()
    }

    fn entry_categories(&self, _id: EntryId) -> Vec<CategoryId> {
        Vec::new()
    }

    fn category_id_by_slug(&self, _slug: &str) -> Option<CategoryId> {
        None
    }

    fn categories(&self) -> Vec<Category> {
        Vec::new()
    }
}

#[test]
fn missing_record_is_exported_with_empty_fields() {
    let outcome = run_export_at(
        &Sparse,
        &ExclusionSet::from([UNCATEGORIZED]),
        &ExportOptions::default(),
        generated_at(),
    )
    .expect("export");
    assert_eq!(outcome.stats.missing_records, 1);
    assert_eq!(
        body(&outcome.document.bytes),
        "ID;Titre;Nom du fichier;URL\n7;;;\n"
    );
}
