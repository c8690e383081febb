use std::sync::Arc;

use tokio::task::{self, JoinHandle};

use crate::modules::{
    book::{Book, BookFacade, BookRepositoryImpl, BookValidator},
    game::{Game, GameFacade, GameRepositoryImpl, GameValidator},
    genre::{Genre, GenreFacade, GenreRepositoryImpl, GenreResolver, GenreValidator},
    movie::{Movie, MovieFacade, MovieRepositoryImpl, MovieValidator},
    music::{
        application::{MusicValidator, SongValidator},
        Music, MusicFacade, MusicRepositoryImpl, SongFacade,
    },
    picture::{Picture, PictureFacade, PictureRepositoryImpl, PictureValidator},
    show::{
        application::{EpisodeValidator, SeasonValidator},
        EpisodeFacade, SeasonFacade, Show, ShowFacade, ShowRepositoryImpl, ShowValidator,
    },
};
use crate::shared::application::{CatalogFacade, CatalogService, ChildFacade};
use crate::shared::domain::{CacheStats, CacheStore, CatalogRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{CacheAdapter, Database, DatabaseState, InMemoryRepository, NoopCache};
use crate::shared::utils::init_logger;
use crate::shared::CatalogConfig;
use crate::{log_info, log_warn};

struct Repositories {
    genres: Arc<dyn CatalogRepository<Genre>>,
    pictures: Arc<dyn CatalogRepository<Picture>>,
    movies: Arc<dyn CatalogRepository<Movie>>,
    shows: Arc<dyn CatalogRepository<Show>>,
    games: Arc<dyn CatalogRepository<Game>>,
    music: Arc<dyn CatalogRepository<Music>>,
    books: Arc<dyn CatalogRepository<Book>>,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            genres: Arc::new(InMemoryRepository::new("Genre")),
            pictures: Arc::new(InMemoryRepository::new("Picture")),
            movies: Arc::new(InMemoryRepository::new("Movie")),
            shows: Arc::new(InMemoryRepository::new("Show")),
            games: Arc::new(InMemoryRepository::new("Game")),
            music: Arc::new(InMemoryRepository::new("Music")),
            books: Arc::new(InMemoryRepository::new("Book")),
        }
    }

    fn postgres(db: &Arc<Database>) -> Self {
        Self {
            genres: Arc::new(GenreRepositoryImpl::new(Arc::clone(db))),
            pictures: Arc::new(PictureRepositoryImpl::new(Arc::clone(db))),
            movies: Arc::new(MovieRepositoryImpl::new(Arc::clone(db))),
            shows: Arc::new(ShowRepositoryImpl::new(Arc::clone(db))),
            games: Arc::new(GameRepositoryImpl::new(Arc::clone(db))),
            music: Arc::new(MusicRepositoryImpl::new(Arc::clone(db))),
            books: Arc::new(BookRepositoryImpl::new(Arc::clone(db))),
        }
    }
}

/// Every facade of the catalog, wired to one storage backend and one cache
#[derive(Clone)]
pub struct CatalogContext {
    pub genres: GenreFacade,
    pub pictures: PictureFacade,
    pub movies: MovieFacade,
    pub shows: ShowFacade,
    pub seasons: SeasonFacade,
    pub episodes: EpisodeFacade,
    pub games: GameFacade,
    pub music: MusicFacade,
    pub songs: SongFacade,
    pub books: BookFacade,
    cache: Arc<dyn CacheStore>,
    storage: &'static str,
}

impl CatalogContext {
    /// Catalog kept in process memory
    pub fn in_memory(config: &CatalogConfig) -> Self {
        Self::build(Repositories::in_memory(), config, "memory")
    }

    /// Catalog stored in PostgreSQL; `db` must already be migrated
    pub fn with_database(db: Arc<Database>, config: &CatalogConfig) -> Self {
        Self::build(Repositories::postgres(&db), config, "postgres")
    }

    fn build(repos: Repositories, config: &CatalogConfig, storage: &'static str) -> Self {
        let cache: Arc<dyn CacheStore> = if config.cache_enabled {
            Arc::new(CacheAdapter::new(config.cache_ttl))
        } else {
            Arc::new(NoopCache)
        };

        let genre_service = Arc::new(
            CatalogService::new(repos.genres, Arc::clone(&cache), "genres", "Genre")
                .with_dependent_regions(&["movies", "shows"]),
        );
        let picture_service = Arc::new(
            CatalogService::new(repos.pictures, Arc::clone(&cache), "pictures", "Picture")
                .with_dependent_regions(&["movies", "shows"]),
        );
        let movie_service = Arc::new(CatalogService::new(
            repos.movies,
            Arc::clone(&cache),
            "movies",
            "Movie",
        ));
        let show_service = Arc::new(CatalogService::new(
            repos.shows,
            Arc::clone(&cache),
            "shows",
            "Show",
        ));
        let game_service = Arc::new(CatalogService::new(
            repos.games,
            Arc::clone(&cache),
            "games",
            "Game",
        ));
        let music_service = Arc::new(CatalogService::new(
            repos.music,
            Arc::clone(&cache),
            "music",
            "Music",
        ));
        let book_service = Arc::new(CatalogService::new(
            repos.books,
            Arc::clone(&cache),
            "books",
            "Book",
        ));

        log_info!(
            "Catalog ready on {} storage (cache {})",
            storage,
            if config.cache_enabled { "enabled" } else { "disabled" }
        );

        let genre_resolver = Arc::new(GenreResolver::new(Arc::clone(&genre_service)));

        Self {
            movies: CatalogFacade::new(
                movie_service,
                Arc::new(MovieValidator::new(
                    Arc::clone(&genre_service),
                    Arc::clone(&picture_service),
                )),
            )
            .with_resolver(genre_resolver.clone()),
            shows: CatalogFacade::new(
                Arc::clone(&show_service),
                Arc::new(ShowValidator::new(
                    Arc::clone(&genre_service),
                    Arc::clone(&picture_service),
                )),
            )
            .with_resolver(genre_resolver),
            seasons: ChildFacade::new(
                Arc::clone(&show_service),
                Arc::new(SeasonValidator),
                "Season",
                "Show",
            ),
            episodes: ChildFacade::new(show_service, Arc::new(EpisodeValidator), "Episode", "Season"),
            genres: CatalogFacade::new(genre_service, Arc::new(GenreValidator)),
            pictures: CatalogFacade::new(picture_service, Arc::new(PictureValidator)),
            games: CatalogFacade::new(game_service, Arc::new(GameValidator)),
            music: CatalogFacade::new(Arc::clone(&music_service), Arc::new(MusicValidator)),
            songs: ChildFacade::new(music_service, Arc::new(SongValidator), "Song", "Music"),
            books: CatalogFacade::new(book_service, Arc::new(BookValidator)),
            cache,
            storage,
        }
    }

    /// `"postgres"` or `"memory"`
    pub fn storage(&self) -> &'static str {
        self.storage
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Remove every record of every type
    pub async fn new_data(&self) -> AppResult<()> {
        self.movies.new_data().await?;
        self.shows.new_data().await?;
        self.games.new_data().await?;
        self.music.new_data().await?;
        self.books.new_data().await?;
        self.genres.new_data().await?;
        self.pictures.new_data().await?;
        self.cache.clear().await;
        Ok(())
    }

    /// Restore positions of every record type
    pub async fn update_positions(&self) -> AppResult<()> {
        self.genres.update_positions().await?;
        self.pictures.update_positions().await?;
        self.movies.update_positions().await?;
        self.shows.update_positions().await?;
        self.games.update_positions().await?;
        self.music.update_positions().await?;
        self.books.update_positions().await?;
        Ok(())
    }
}

/// Open storage for `config` off the caller's task.
///
/// Connecting and migrating are blocking, so they run on the blocking pool.
/// Without `DATABASE_URL`, or when PostgreSQL can't be reached, the catalog
/// falls back to in-memory storage.
pub fn spawn_bootstrap(config: CatalogConfig) -> JoinHandle<AppResult<CatalogContext>> {
    init_logger();
    tokio::spawn(async move {
        let state = {
            let config = config.clone();
            task::spawn_blocking(move || DatabaseState::initialize(&config)).await?
        };

        let context = match state.get_database() {
            Ok(db) => CatalogContext::with_database(db, &config),
            Err(e) => {
                if matches!(state, DatabaseState::Unavailable { .. }) {
                    log_warn!("{}; continuing with in-memory storage", e);
                }
                CatalogContext::in_memory(&config)
            }
        };
        Ok(context)
    })
}
