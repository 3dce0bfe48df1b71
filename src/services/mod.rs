pub mod openlibrary;
pub mod recommender;
pub mod similarity;
