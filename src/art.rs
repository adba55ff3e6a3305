/// Portrait printed beside a single quote
pub fn naval_portrait() -> &'static str {
    r#"           .-""""""-.
         .'          '.
        /              \
       ;   .-"""""-.    ;
       |  /         \   |
       | |  _     _  |  |
      (| | (o)   (o) | |)
       | |     ^     | |
       |  \  '---'  /  |
        \  '._____.'  /
         '.  |||||  .'
           '-.___.-'
          ___|   |___
      _.-'   \   /   '-._
    .'        \ /        '.
   /    N  A  V  A  L      \"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_shape() {
        let art = naval_portrait();
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|line| !line.trim().is_empty()));
        assert!(art.is_ascii());
        assert!(!art.ends_with('\n'));
    }
}
