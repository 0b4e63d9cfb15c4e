// tapcard static exporter - renders the business card and its contact
// file to a self-contained output directory.

pub mod backgrounds;
pub mod entrance;
pub mod loaders;
pub mod page;
pub mod profile;
