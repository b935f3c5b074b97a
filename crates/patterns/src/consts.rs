use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Story files: {prefix}_story_{YYYYMMDD}_{HHMMSS}_{seq}_{shortcode}_{role}.{ext}
regex!(
    STORY_FILE_RE,
    r"^(.+)_story_(\d{8})_(\d{6})_(\d{2})_(.+)_(raw|screencapture|screenshot)\.(mp4|jpg|jpeg|png)$"
);
// Post folders: {username}_IG_POST_{YYYYMMDD}_{shortcode}[_collab_...][ - PAIRED]
regex!(POST_FOLDER_RE, r"^(.+?)_IG_POST_(\d{8})_(.+?)(?:\s+-\s+PAIRED)?$");
// Profile folders: IG Profile - YYYY-MM-DD - Name - @handle
regex!(PROFILE_FOLDER_RE, r"^IG Profile - (\d{4}-\d{2}-\d{2}) - (.+?) - @([\w.]+)$");
// Comment thread folders: IG Regular Comment ... - @handle[ - PAIRED]
regex!(COMMENT_FOLDER_RE, r"^IG Regular Comment\b.*?(\d{4}-\d{2}-\d{2}).*?- @([\w.]+)(?:\s+-\s+PAIRED)?$");
// Named story folders: IG Stories - YYYY-MM-DD - Name - handle
regex!(NAMED_STORY_FOLDER_RE, r"^IG Stories - (\d{4}-\d{2}-\d{2}) - (.+?) - ([\w.]+)$");
// Named story variant: IG Stories TXT ... @handle
regex!(STORIES_TXT_FOLDER_RE, r"^IG Stories TXT\b.*?(\d{4}-\d{2}-\d{2}).*?@([\w.]+)$");
// Reshare folders: IG Reshare - YYYY-MM-DD - Name - handle
regex!(RESHARE_FOLDER_RE, r"^IG Reshare - (\d{4}-\d{2}-\d{2}) - (.+?) - ([\w.]+)$");
// Video evidence files: IG VE - date(s) - Name - handle[ - N].MP4
regex!(VE_FILE_RE, r"(?i)^IG VE - (.+?) - (.+?) - ([\w.]+?)(?:\s+-\s+\d+)?\.MP4$");
// Profile screenshot files: {username}_profile_{YYYYMMDD}.{ext}
regex!(PROFILE_FILE_RE, r"^([\w.]+)_profile_(\d{8})\.(png|jpg)$");
// Labeled site-code folders: WPAS {code}
regex!(WPAS_RE, r"^WPAS\s+(.+)$");
// Collaborator suffix on post folder names: ..._collab_a_b
regex!(COLLAB_RE, r"_collab_([\w.]+)$");
// Checks subdirectory carrying the archiver initials.
regex!(CHECKS_DIR_RE, r"^SAT Checks - (.+?) - RTA$");
