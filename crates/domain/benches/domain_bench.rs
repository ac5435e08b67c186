use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    AddChapter, AuthorIdOrData, BookService, ChapterTitle, CreateDraft, Genre,
    InMemoryAuthorProvider, InMemoryPublisherProvider, InMemoryPublishingHouse, MoveToEditing,
    Publisher, PublisherId, Title, WordCountAnalyzer,
};
use common::{NonEmptyString, PositiveInt};
use event_log::InMemoryEventLog;

fn make_service() -> (BookService<InMemoryEventLog>, PublisherId) {
    let authors = InMemoryAuthorProvider::new();
    let publishers = InMemoryPublisherProvider::new();
    let publisher = Publisher::new(PublisherId::new(), "North Star Press").unwrap();
    let publisher_id = publisher.id;
    publishers.register(publisher);

    let service = BookService::new(
        InMemoryEventLog::new(),
        Arc::new(authors),
        Arc::new(publishers),
        Arc::new(InMemoryPublishingHouse::new()),
        Arc::new(WordCountAnalyzer::default()),
    );
    (service, publisher_id)
}

fn draft_command(publisher_id: PublisherId) -> CreateDraft {
    CreateDraft::for_new_book(
        Title::new("Benchmark Book").unwrap(),
        AuthorIdOrData::Data {
            name: NonEmptyString::new("Bench Author").unwrap(),
        },
        publisher_id,
        PositiveInt::new(1).unwrap(),
        Some(Genre::new("Fiction").unwrap()),
    )
}

fn bench_create_draft(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/create_draft", |b| {
        b.iter(|| {
            rt.block_on(async {
                let (service, publisher_id) = make_service();
                service
                    .create_draft(draft_command(publisher_id))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_add_chapter(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/add_chapter", |b| {
        b.iter(|| {
            rt.block_on(async {
                let (service, publisher_id) = make_service();
                let cmd = draft_command(publisher_id);
                let book_id = cmd.book_id;
                service.create_draft(cmd).await.unwrap();
                service
                    .add_chapter(AddChapter::new(
                        book_id,
                        ChapterTitle::new("chapter 1").unwrap(),
                        "It was a dark and stormy night.",
                    ))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_writing_to_editing_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/writing_to_editing", |b| {
        b.iter(|| {
            rt.block_on(async {
                let (service, publisher_id) = make_service();
                let cmd = draft_command(publisher_id);
                let book_id = cmd.book_id;
                service.create_draft(cmd).await.unwrap();
                for n in 1..=3 {
                    service
                        .add_chapter(AddChapter::new(
                            book_id,
                            ChapterTitle::new(format!("chapter {n}")).unwrap(),
                            "It was a dark and stormy night.",
                        ))
                        .await
                        .unwrap();
                }
                service
                    .move_to_editing(MoveToEditing::new(book_id))
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_create_draft,
    bench_add_chapter,
    bench_writing_to_editing_cycle
);
criterion_main!(benches);
