pub async fn hello() -> &'static str {
    "MatchPoint API is running"
}
