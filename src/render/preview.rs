//! Minimal HTML page embedding a generated vector document

/// Build an HTML preview page referencing the vector document by file name
///
/// The page embeds the SVG rather than inlining it, so the preview stays in
/// sync if the vector artifact is regenerated.
pub fn html_preview(svg_file_name: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>Hexagonal Mosaic</title>\n\
         <style>body {{ font-family: sans-serif; text-align: center; }}</style>\n\
         </head>\n\
         <body>\n\
         <h1>Hexagonal Mosaic</h1>\n\
         <embed src=\"{svg_file_name}\" width=\"100%\" height=\"auto\" type=\"image/svg+xml\" />\n\
         </body>\n\
         </html>\n"
    )
}
