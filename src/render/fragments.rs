use crate::dataset::types::Movie;

pub const ID_SEARCH_FORM: &str = r#"<form method="POST" action="/data/search/id/">
    <input type="text" name="movie_id" placeholder="Enter Movie ID" required>
    <input type="submit" value="Search">
</form>"#;

pub const TITLE_SEARCH_FORM: &str = r#"<form method="POST" action="/data/search/title/result">
    <input type="text" name="movie_title" placeholder="Enter Movie Title" required>
    <input type="submit" value="Search">
</form>"#;

pub fn movie_detail(movie: &Movie) -> String {
    format!(
        "<h2>Movie Information:</h2>\n\
         <p>Movie ID: {}</p>\n\
         <p>Title: {}</p>\n\
         <p>Year: {}</p>\n\
         <p>Rated: {}</p>\n\
         <p>Released: {}</p>\n\
         <p>Runtime: {}</p>\n\
         <p>Genre: {}</p>\n\
         <p>Director: {}</p>\n\
         <p>Writer: {}</p>\n\
         <p>Actors: {}</p>\n\
         <p>Plot: {}</p>\n\
         <p>Language: {}</p>\n\
         <p>Country: {}</p>\n\
         <p>Awards: {}</p>\n\
         <p>IMDB Rating: {}</p>\n\
         <p>IMDB Votes: {}</p>",
        movie.movie_id,
        movie.title,
        movie.year,
        movie.rated,
        movie.released,
        movie.runtime,
        movie.genre,
        movie.director,
        movie.writer,
        movie.actors,
        movie.plot,
        movie.language,
        movie.country,
        movie.awards,
        movie.imdb_rating,
        movie.imdb_votes
    )
}

pub fn movie_list(movies: &[&Movie]) -> String {
    let mut results = String::from("<h2>Movies:</h2><ul>");
    for movie in movies {
        results.push_str(&format!(
            "<li>Movie ID: {}<br>Title: {}<br>Genre: {}<br>Director: {}<br>Year: {}</li>",
            movie.movie_id, movie.title, movie.genre, movie.director, movie.year
        ));
    }
    results.push_str("</ul>");
    results
}
