mod contrast;
mod images;
