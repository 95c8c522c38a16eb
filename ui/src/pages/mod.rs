pub mod albums;
pub mod create_post;
pub mod home;
pub mod not_found;
pub mod post;
pub mod search;
pub mod users;

pub use albums::AlbumsPage;
pub use create_post::CreatePostPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use post::PostPage;
pub use search::SearchPage;
pub use users::UsersPage;
