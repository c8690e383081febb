/// PostgreSQL repository tests - each test runs on its own database
///
/// Run with `TEST_DATABASE_URL` set and `--ignored`.
mod utils;

use catalog::modules::game::Format;
use catalog::modules::genre::{Genre, GenreRepositoryImpl};
use catalog::modules::show::ShowRepositoryImpl;
use catalog::shared::domain::{CatalogRepository, Language};
use tokio_test::{assert_err, assert_ok};
use utils::factories::{book, episode, genre, picture, season, song, music, GameFactory, MovieFactory, ShowFactory};
use utils::helpers::postgres_catalog;
use utils::test_db::TestDb;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn movie_round_trips_with_genres_and_picture() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db);
                let drama = assert_ok!(catalog.genres.add(genre("Drama")).await);
                let cover = assert_ok!(catalog.pictures.add(picture(&[1, 2, 3])).await);

                let stored = assert_ok!(
                    catalog
                        .movies
                        .add(
                            MovieFactory::new()
                                .with_media(vec![3600, 1200])
                                .with_picture(cover.id)
                                .with_genres(vec![drama])
                                .build()
                        )
                        .await
                );

                let loaded = catalog.movies.get(stored.id.unwrap()).await.unwrap().unwrap();
                assert_eq!(loaded.genre_names(), "Drama");
                assert_eq!(loaded.media, Some(vec![3600, 1200]));
                assert_eq!(loaded.subtitles, Some(vec![Language::Cz]));
                assert_eq!(loaded.picture, cover.id);
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn deleting_a_picture_clears_movie_reference() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db);
                let cover = assert_ok!(catalog.pictures.add(picture(&[9])).await);
                let movie = assert_ok!(
                    catalog
                        .movies
                        .add(MovieFactory::new().with_picture(cover.id).build())
                        .await
                );

                assert_ok!(catalog.pictures.remove(cover.id.unwrap()).await);

                let loaded = catalog.movies.get(movie.id.unwrap()).await.unwrap().unwrap();
                assert_eq!(loaded.picture, None);
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn show_children_are_synchronised_on_update() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db);
                let show = assert_ok!(catalog.shows.add(ShowFactory::default().build()).await);
                let show_id = show.id.unwrap();
                let first = assert_ok!(catalog.seasons.add(show_id, season(1)).await);
                let second = assert_ok!(catalog.seasons.add(show_id, season(2)).await);
                for number in 1..=2 {
                    assert_ok!(catalog.episodes.add(first.id.unwrap(), episode(number, 1200)).await);
                }

                assert_ok!(catalog.seasons.move_up(second.id.unwrap()).await);
                assert_ok!(catalog.seasons.remove(first.id.unwrap()).await);

                let seasons = catalog.seasons.find_by_parent(show_id).await.unwrap();
                assert_eq!(seasons.len(), 1);
                assert_eq!(seasons[0].id, second.id);
                assert_eq!(seasons[0].position, Some(0));
                assert_eq!(catalog.shows.episodes_count().await.unwrap(), 0);
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn duplicated_show_gets_fresh_rows() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db);
                let show = assert_ok!(catalog.shows.add(ShowFactory::default().build()).await);
                let first = assert_ok!(catalog.seasons.add(show.id.unwrap(), season(1)).await);
                assert_ok!(catalog.episodes.add(first.id.unwrap(), episode(1, 1500)).await);

                let copy = assert_ok!(catalog.shows.duplicate(show.id.unwrap()).await);

                let seasons = catalog.seasons.find_by_parent(copy.id.unwrap()).await.unwrap();
                assert_eq!(seasons.len(), 1);
                assert_ne!(seasons[0].id, first.id);
                assert_eq!(catalog.shows.total_length().await.unwrap().seconds(), 3000);
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn music_songs_and_flat_records_persist() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db.clone());
                let album = assert_ok!(catalog.music.add(music("Album", 1)).await);
                assert_ok!(catalog.songs.add(album.id.unwrap(), song("One", 200)).await);
                assert_ok!(catalog.songs.add(album.id.unwrap(), song("Two", 100)).await);
                assert_eq!(catalog.music.songs_count().await.unwrap(), 2);

                let game = assert_ok!(
                    catalog
                        .games
                        .add(GameFactory::named("Diablo").with_format(Format::BattleNet).build())
                        .await
                );
                assert_eq!(game.format, Some(Format::BattleNet));

                let stored = assert_ok!(
                    catalog
                        .books
                        .add(book("Duna", vec![Language::En, Language::Sk]))
                        .await
                );
                assert_eq!(stored.languages, Some(vec![Language::En, Language::Sk]));

                let repository = catalog::modules::book::BookRepositoryImpl::new(db);
                assert_ok!(repository.delete_all().await);
                assert!(repository.find_all().await.unwrap().is_empty());
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn season_of_another_show_is_not_taken_over() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let catalog = postgres_catalog(db.clone());
                let first = assert_ok!(catalog.shows.add(ShowFactory::named("First").build()).await);
                let second = assert_ok!(catalog.shows.add(ShowFactory::named("Second").build()).await);
                let foreign = assert_ok!(catalog.seasons.add(second.id.unwrap(), season(1)).await);

                let repository = ShowRepositoryImpl::new(db);
                let mut show = repository.find_by_id(first.id.unwrap()).await.unwrap().unwrap();
                let stored_second = repository.find_by_id(second.id.unwrap()).await.unwrap().unwrap();
                show.seasons.push(stored_second.seasons[0].clone());

                let err = assert_err!(repository.update(&show).await);
                assert!(err.is_not_found());

                let reloaded = repository.find_by_id(second.id.unwrap()).await.unwrap().unwrap();
                assert_eq!(reloaded.seasons.len(), 1);
                assert_eq!(reloaded.seasons[0].id, foreign.id);
                let untouched = repository.find_by_id(first.id.unwrap()).await.unwrap().unwrap();
                assert!(untouched.seasons.is_empty());
            })
        })
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn failed_reorder_rolls_back_the_delete() {
    let test_db = TestDb::new();
    test_db
        .run_test(|db| {
            Box::pin(async move {
                let repository = GenreRepositoryImpl::new(db);
                let mut drama = Genre::new("Drama");
                drama.position = Some(0);
                let drama = assert_ok!(repository.insert(&drama).await);
                let mut comedy = Genre::new("Comedy");
                comedy.position = Some(1);
                let mut comedy = assert_ok!(repository.insert(&comedy).await);

                comedy.position = Some(0);
                let mut ghost = Genre::new("Ghost");
                ghost.id = Some(9_999);
                ghost.position = Some(1);
                let err = assert_err!(
                    repository
                        .delete_and_reorder(drama.id.unwrap(), &[comedy, ghost])
                        .await
                );
                assert!(err.is_not_found());

                let stored = repository.find_all().await.unwrap();
                let names: Vec<_> = stored.iter().map(|g| (g.name.as_str(), g.position)).collect();
                assert_eq!(names, vec![("Drama", Some(0)), ("Comedy", Some(1))]);
            })
        })
        .await;
}
