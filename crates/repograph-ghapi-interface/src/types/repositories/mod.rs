mod repository;

pub use repository::GhRepository;
