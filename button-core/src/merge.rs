//! # Merge 模块
//!
//! 工具类 class 的拼接与冲突合并。
//!
//! ## 合并规则
//!
//! - 输入按空白切分，空 token 丢弃
//! - 每个 token 拆分为「修饰符（`hover:` 等）+ `!important` + 工具类」
//! - 工具类归入冲突分组（背景色、字号、内边距……），未知工具类自成一组
//! - 从右往左扫描：同一「修饰符 + important + 分组」只保留最后出现的 token，
//!   且后出现的上位分组会吃掉先出现的下位分组（`p-*` 覆盖 `px-*`）
//! - 保留 token 的相对顺序不变

use std::collections::HashSet;

/// 合并后的有序 token 序列
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleTokenSet {
    tokens: Vec<String>,
}

impl StyleTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部 token
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// 查找 token 的位置
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 空格拼接的 class 字符串
    pub fn to_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl std::fmt::Display for StyleTokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_class_string())
    }
}

/// 条件拼接 class（等价于 clsx），最终统一合并
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, classes: impl AsRef<str>) -> &mut Self {
        self.parts
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
        self
    }

    pub fn push_if(&mut self, condition: bool, classes: impl AsRef<str>) -> &mut Self {
        if condition {
            self.push(classes);
        }
        self
    }

    pub fn push_opt(&mut self, classes: Option<&str>) -> &mut Self {
        if let Some(classes) = classes {
            self.push(classes);
        }
        self
    }

    /// 合并冲突并输出
    pub fn finish(&self) -> StyleTokenSet {
        StyleTokenSet {
            tokens: merge_tokens(&self.parts),
        }
    }
}

/// 合并多段 class 字符串
pub fn merge_classes<'a>(inputs: impl IntoIterator<Item = &'a str>) -> String {
    let mut list = ClassList::new();
    for input in inputs {
        list.push(input);
    }
    list.finish().to_class_string()
}

/// 合并 token 序列（后者胜出）
pub fn merge_tokens(tokens: &[String]) -> Vec<String> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&String> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let parsed = ParsedClass::parse(token);
        let key = parsed.key(parsed.group);
        if claimed.contains(&key) {
            continue;
        }
        for sub in conflicts_of(parsed.group) {
            claimed.insert(parsed.key(sub));
        }
        claimed.insert(key);
        kept.push(token);
    }

    kept.into_iter().rev().cloned().collect()
}

/// 拆分后的 class
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    /// 排序后以 `:` 连接的修饰符
    modifiers: String,
    important: bool,
    /// 冲突分组；未知工具类即其本身
    group: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let (mut modifiers, mut base) = split_modifiers(token);
        modifiers.sort_unstable();

        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            important = true;
            base = rest;
        } else if let Some(rest) = base.strip_suffix('!') {
            important = true;
            base = rest;
        }

        let unsigned = base.strip_prefix('-').unwrap_or(base);
        let group = classify(unsigned).unwrap_or(base);

        Self {
            modifiers: modifiers.join(":"),
            important,
            group,
        }
    }

    fn key(&self, group: &str) -> String {
        format!(
            "{}|{}|{}",
            self.modifiers,
            if self.important { "!" } else { "" },
            group
        )
    }
}

/// 按顶层 `:` 拆分修饰符（方括号内的 `:` 不算）
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (modifiers, &token[start..])
}

/// 任意值方括号内的内容
fn arbitrary_inner(v: &str) -> Option<&str> {
    v.strip_prefix('[')?.strip_suffix(']')
}

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "svh", "lvh", "dvh", "vmin", "vmax", "ch", "ex", "pt",
    "pc", "in", "cm", "mm", "lh", "rlh",
];

/// CSS 长度：`0`、`15px`、`-0.5rem`、`calc(..)` 等
fn is_css_length(v: &str) -> bool {
    if v == "0" {
        return true;
    }
    if ["calc(", "min(", "max(", "clamp("]
        .iter()
        .any(|f| v.starts_with(f))
    {
        return true;
    }
    let v = v.strip_prefix('-').unwrap_or(v);
    let split = v
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(v.len());
    let (num, unit) = v.split_at(split);
    is_number(num) && LENGTH_UNITS.contains(&unit)
}

/// 任意长度：`[15px]`、`[length:var(--x)]`
fn is_arbitrary_length(v: &str) -> bool {
    arbitrary_inner(v).is_some_and(|inner| inner.starts_with("length:") || is_css_length(inner))
}

/// 任意阴影：以两个偏移量开头，如 `[0_0_20px_#fff]`、`[inset_0_2px_4px_red]`
fn is_arbitrary_shadow(v: &str) -> bool {
    let Some(inner) = arbitrary_inner(v) else {
        return false;
    };
    if inner.starts_with("shadow:") {
        return true;
    }
    let inner = inner.strip_prefix("inset_").unwrap_or(inner);
    let mut parts = inner.split('_');
    matches!(
        (parts.next(), parts.next()),
        (Some(x), Some(y)) if is_css_length(x) && is_css_length(y)
    )
}

fn is_number(v: &str) -> bool {
    !v.is_empty() && v.parse::<f64>().is_ok()
}

fn is_tshirt(v: &str) -> bool {
    let size = v.trim_start_matches(|c: char| c.is_ascii_digit());
    matches!(size, "xs" | "sm" | "md" | "lg" | "xl") && (size.len() == v.len() || size == "xl")
}

/// 字号：具名尺寸或任意长度，可带 `/<行高>` 后缀（`text-lg/7`）
fn is_font_size(v: &str) -> bool {
    let size = match v.rsplit_once('/') {
        Some((size, _)) if !v.ends_with(']') => size,
        _ => v,
    };
    is_tshirt(size) || size == "base" || is_arbitrary_length(size)
}

/// 无值或数值（边框/ring 宽度这类工具类）
fn is_width_value(v: &str) -> bool {
    v.is_empty() || is_number(v) || is_arbitrary_length(v)
}

fn classify_exact(base: &str) -> Option<&'static str> {
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
        | "inline-table" | "grid" | "inline-grid" | "contents" | "list-item" | "hidden"
        | "flow-root" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "truncate" => "text-overflow",
        "flex-1" | "flex-auto" | "flex-initial" | "flex-none" => "flex",
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => "flex-wrap",
        "flex-shrink" | "flex-shrink-0" | "shrink" => "shrink",
        "flex-grow" | "flex-grow-0" | "grow" => "grow",
        "transition" => "transition",
        "transform" | "transform-gpu" | "transform-none" => "transform",
        "shadow" => "shadow",
        "rounded" => "rounded",
        "border" => "border-w",
        "ring" => "ring-w",
        "outline" => "outline-style",
        "glass" => "glass",
        _ => return None,
    };
    Some(group)
}

/// 工具类 → 冲突分组
fn classify(base: &str) -> Option<&'static str> {
    if let Some(group) = classify_exact(base) {
        return Some(group);
    }

    let (head, rest) = base.split_once('-')?;
    let group = match head {
        "p" => "p",
        "px" => "px",
        "py" => "py",
        "ps" => "ps",
        "pe" => "pe",
        "pt" => "pt",
        "pr" => "pr",
        "pb" => "pb",
        "pl" => "pl",
        "m" => "m",
        "mx" => "mx",
        "my" => "my",
        "ms" => "ms",
        "me" => "me",
        "mt" => "mt",
        "mr" => "mr",
        "mb" => "mb",
        "ml" => "ml",
        "w" => "w",
        "h" => "h",
        "size" => "size",
        "min" => match rest.split_once('-') {
            Some(("w", _)) => "min-w",
            Some(("h", _)) => "min-h",
            _ => return None,
        },
        "max" => match rest.split_once('-') {
            Some(("w", _)) => "max-w",
            Some(("h", _)) => "max-h",
            _ => return None,
        },
        "bg" => classify_bg(rest),
        "text" => {
            if is_font_size(rest) {
                "font-size"
            } else if matches!(rest, "left" | "center" | "right" | "justify" | "start" | "end") {
                "text-align"
            } else {
                "text-color"
            }
        }
        "font" => {
            if matches!(
                rest,
                "thin"
                    | "extralight"
                    | "light"
                    | "normal"
                    | "medium"
                    | "semibold"
                    | "bold"
                    | "extrabold"
                    | "black"
            ) {
                "font-weight"
            } else {
                "font-family"
            }
        }
        "rounded" => classify_rounded(rest),
        "border" => classify_border(rest),
        "ring" => match rest.strip_prefix("offset-") {
            Some(v) if is_width_value(v) => "ring-offset-w",
            Some(_) => "ring-offset-color",
            None if is_width_value(rest) => "ring-w",
            None => "ring-color",
        },
        "shadow" => {
            if is_tshirt(rest) || matches!(rest, "inner" | "none") || is_arbitrary_shadow(rest) {
                "shadow"
            } else {
                "shadow-color"
            }
        }
        "outline" => {
            if matches!(rest, "none" | "dashed" | "dotted" | "double") {
                "outline-style"
            } else if rest.starts_with("offset-") {
                "outline-offset"
            } else if is_width_value(rest) {
                "outline-w"
            } else {
                "outline-color"
            }
        }
        "opacity" => "opacity",
        "cursor" => "cursor",
        "pointer" => "pointer-events",
        "select" => "select",
        "items" => "align-items",
        "content" => "align-content",
        "self" => "align-self",
        "justify" => {
            if rest.starts_with("items-") {
                "justify-items"
            } else if rest.starts_with("self-") {
                "justify-self"
            } else {
                "justify-content"
            }
        }
        "overflow" => {
            if rest.starts_with("x-") {
                "overflow-x"
            } else if rest.starts_with("y-") {
                "overflow-y"
            } else {
                "overflow"
            }
        }
        "transition" => "transition",
        "duration" => "duration",
        "ease" => "ease",
        "delay" => "delay",
        "animate" => "animate",
        "scale" => {
            if rest.starts_with("x-") {
                "scale-x"
            } else if rest.starts_with("y-") {
                "scale-y"
            } else {
                "scale"
            }
        }
        "translate" => {
            if rest.starts_with("x-") {
                "translate-x"
            } else if rest.starts_with("y-") {
                "translate-y"
            } else {
                return None;
            }
        }
        "rotate" => "rotate",
        "inset" => {
            if rest.starts_with("x-") {
                "inset-x"
            } else if rest.starts_with("y-") {
                "inset-y"
            } else {
                "inset"
            }
        }
        "top" => "top",
        "right" => "right",
        "bottom" => "bottom",
        "left" => "left",
        "z" => "z",
        "gap" => {
            if rest.starts_with("x-") {
                "gap-x"
            } else if rest.starts_with("y-") {
                "gap-y"
            } else {
                "gap"
            }
        }
        "space" => {
            if rest.starts_with("x-") {
                "space-x"
            } else if rest.starts_with("y-") {
                "space-y"
            } else {
                return None;
            }
        }
        "from" => "gradient-from",
        "via" => "gradient-via",
        "to" => "gradient-to",
        "leading" => "leading",
        "tracking" => "tracking",
        "whitespace" => "whitespace",
        "underline" if rest.starts_with("offset-") => "underline-offset",
        "decoration" => {
            if is_width_value(rest) {
                "decoration-thickness"
            } else {
                "decoration-color"
            }
        }
        "backdrop" if rest.starts_with("blur") => "backdrop-blur",
        "blur" => "blur",
        "grow" => "grow",
        "shrink" => "shrink",
        "basis" => "basis",
        "order" => "order",
        "grid" if rest.starts_with("cols-") => "grid-cols",
        "grid" if rest.starts_with("rows-") => "grid-rows",
        "aspect" => "aspect",
        "fill" => "fill",
        "stroke" => {
            if is_width_value(rest) {
                "stroke-w"
            } else {
                "stroke-color"
            }
        }
        _ => return None,
    };
    Some(group)
}

fn classify_bg(rest: &str) -> &'static str {
    if rest.starts_with("gradient-")
        || rest == "none"
        || rest.starts_with("[url(")
        || rest.starts_with("[linear-gradient(")
        || rest.starts_with("[radial-gradient(")
    {
        "bg-image"
    } else if rest.starts_with("clip-") {
        "bg-clip"
    } else if rest.starts_with("opacity-") {
        "bg-opacity"
    } else if matches!(rest, "fixed" | "local" | "scroll") {
        "bg-attachment"
    } else if matches!(rest, "auto" | "cover" | "contain") {
        "bg-size"
    } else if matches!(
        rest,
        "center"
            | "top"
            | "bottom"
            | "left"
            | "right"
            | "left-top"
            | "left-bottom"
            | "right-top"
            | "right-bottom"
    ) {
        "bg-position"
    } else if rest.starts_with("repeat") || rest == "no-repeat" {
        "bg-repeat"
    } else {
        "bg-color"
    }
}

fn classify_rounded(rest: &str) -> &'static str {
    let side = rest.split('-').next().unwrap_or("");
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "s" => "rounded-s",
        "e" => "rounded-e",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        _ => "rounded",
    }
}

fn classify_border(rest: &str) -> &'static str {
    if is_width_value(rest) {
        return "border-w";
    }
    if matches!(rest, "solid" | "dashed" | "dotted" | "double" | "hidden" | "none") {
        return "border-style";
    }
    if matches!(rest, "collapse" | "separate") {
        return "border-collapse";
    }
    if rest.starts_with("opacity-") {
        return "border-opacity";
    }

    let (side, value) = rest.split_once('-').unwrap_or((rest, ""));
    let sided = match side {
        "x" => Some(("border-w-x", "border-color-x")),
        "y" => Some(("border-w-y", "border-color-y")),
        "t" => Some(("border-w-t", "border-color-t")),
        "r" => Some(("border-w-r", "border-color-r")),
        "b" => Some(("border-w-b", "border-color-b")),
        "l" => Some(("border-w-l", "border-color-l")),
        "s" => Some(("border-w-s", "border-color-s")),
        "e" => Some(("border-w-e", "border-color-e")),
        _ => None,
    };
    match sided {
        Some((width, _)) if is_width_value(value) => width,
        Some((_, color)) => color,
        None => "border-color",
    }
}

/// 后出现时会一并覆盖的下位分组
fn conflicts_of(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}
