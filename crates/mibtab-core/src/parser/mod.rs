//! Recursive-descent MIB parser and OID resolver.
//!
//! Drives the lexer over a single module, building the [`Module`] symbol
//! table in one pass. Parent references that are not yet defined are
//! queued and resolved by a fixed-point pass after the body; whatever the
//! tokenized pass missed, a regex sweep over the raw source backfills as
//! empty placeholders.
//!
//! Tolerance is the rule: unknown top-level constructs are skipped with a
//! balanced-brace resync, macro bodies are discarded wholesale, and
//! unresolved parents leave an empty OID behind. Only malformed module
//! headers, broken clause punctuation, and EOF inside a construct abort
//! the parse.

mod augment;

use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::model::{
    Module, ModuleIdentity, NotificationType, ObjectIdentity, ObjectType, Oid, TextualConvention,
};

/// Clause keywords that terminate a free-text type expression.
const TYPE_STOPS: &[&str] = &[
    "ACCESS",
    "MAX-ACCESS",
    "STATUS",
    "DESCRIPTION",
    "INDEX",
    "::=",
];

/// Constructs resolved into `nodes` only, with their bodies discarded.
const GROUP_LIKE: &[&str] = &[
    "OBJECT-GROUP",
    "NOTIFICATION-GROUP",
    "MODULE-COMPLIANCE",
    "AGENT-CAPABILITIES",
];

/// Keywords that, following an identifier, introduce a new top-level
/// declaration.
const CONSTRUCT_KEYWORDS: &[&str] = &[
    "OBJECT",
    "OBJECT-TYPE",
    "OBJECT-IDENTITY",
    "MODULE-IDENTITY",
    "NOTIFICATION-TYPE",
    "TEXTUAL-CONVENTION",
    "MACRO",
    "OBJECT-GROUP",
    "NOTIFICATION-GROUP",
    "MODULE-COMPLIANCE",
    "AGENT-CAPABILITIES",
];

/// Parse a single MIB module into its symbol table.
///
/// Exactly one module per input. Symbols imported from other modules are
/// not resolved; declarations referencing them stay in the table with an
/// empty OID.
pub fn parse(source: &[u8]) -> Result<Module, ParseError> {
    Parser::new(source).parse()
}

/// The right-hand side of `::= { ... }`.
#[derive(Clone, Debug)]
enum OidRef {
    /// `{ 1 3 6 1 }`: a run of numbers taken verbatim as an absolute OID.
    Absolute(Vec<u32>),
    /// `{ parent index }`: symbolic, with the index defaulting to 0.
    Parent { name: String, index: u32 },
}

/// Which record an OID lands in once its parent becomes known.
#[derive(Clone, Copy, Debug)]
enum PendingTarget {
    /// Plain node entry only (OID aliases, group-like constructs).
    Node,
    /// `OBJECT-TYPE` record plus its node entry.
    Object,
    /// `OBJECT-IDENTITY` record plus its node entry.
    ObjectIdentity,
    /// `MODULE-IDENTITY` record plus its node entry.
    ModuleIdentity,
    /// `NOTIFICATION-TYPE` record; notifications are not written to
    /// `nodes` by the tokenized pass.
    Notification,
}

/// A deferred OID resolution waiting for its parent to be defined.
#[derive(Clone, Debug)]
struct PendingRef {
    name: String,
    parent: String,
    index: u32,
    target: PendingTarget,
}

/// Single-use recursive-descent parser over one MIB module.
pub struct Parser {
    lexer: Lexer,
    tok: Token,
    module: Module,
    pending: Vec<PendingRef>,
    src: String,
}

impl Parser {
    /// Create a parser over the given source bytes.
    #[must_use]
    pub fn new(source: &[u8]) -> Self {
        let mut lexer = Lexer::new(source);
        let tok = lexer.next_token();
        Self {
            lexer,
            tok,
            module: Module::new(),
            pending: Vec::new(),
            src: String::from_utf8_lossy(source).into_owned(),
        }
    }

    /// Run the parse to completion and hand the module to the caller.
    pub fn parse(mut self) -> Result<Module, ParseError> {
        self.parse_module()?;
        self.drain_pending();
        augment::augment_from_source(&self.src, &mut self.module);
        Ok(self.module)
    }

    // === Token access ===

    fn next(&mut self) {
        self.tok = self.lexer.next_token();
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.tok.kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    fn accept_ident(&mut self, keyword: &str) -> bool {
        if self.tok.is_ident(keyword) {
            self.next();
            true
        } else {
            false
        }
    }

    fn is_ident(&self, keyword: &str) -> bool {
        self.tok.is_ident(keyword)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.tok.line, self.tok.col, message)
    }

    // === Module structure ===

    /// `ModuleName DEFINITIONS ::= BEGIN <body> END`
    fn parse_module(&mut self) -> Result<(), ParseError> {
        if self.tok.kind != TokenKind::Ident {
            return Err(self.error("expected module name"));
        }
        self.module.name = self.tok.text.clone();
        self.next();
        if !self.accept_ident("DEFINITIONS") {
            return Err(self.error("expected DEFINITIONS"));
        }
        if !self.accept(TokenKind::ColonColonEq) {
            return Err(self.error("expected '::=' after DEFINITIONS"));
        }
        if !self.accept_ident("BEGIN") {
            return Err(self.error("expected BEGIN"));
        }

        if self.is_ident("IMPORTS") {
            self.skip_imports();
        }

        let mut saw_end = false;
        while self.tok.kind != TokenKind::Eof {
            if self.is_ident("END") {
                // Module terminator only when nothing but EOF follows;
                // otherwise this END closes a skipped macro body.
                if self.lexer.peek().kind == TokenKind::Eof {
                    self.next();
                    saw_end = true;
                    break;
                }
                self.next();
                continue;
            }
            if self.tok.kind == TokenKind::Ident {
                let name = self.tok.text.clone();
                self.next();
                self.parse_declaration(name)?;
                continue;
            }
            self.next();
        }
        if !saw_end {
            return Err(self.error("expected END"));
        }
        Ok(())
    }

    /// Consume `IMPORTS ... ;` without resolving anything. References to
    /// imported symbols stay pending and are abandoned at the end.
    fn skip_imports(&mut self) {
        self.next(); // IMPORTS
        while self.tok.kind != TokenKind::Eof && !self.accept(TokenKind::Semicolon) {
            self.next();
        }
    }

    /// Dispatch on the token after the declared name.
    fn parse_declaration(&mut self, name: String) -> Result<(), ParseError> {
        if self.is_ident("MACRO") {
            self.skip_macro_body();
            return Ok(());
        }
        if self.is_ident("OBJECT") {
            return self.parse_oid_alias(name);
        }
        if self.accept(TokenKind::ColonColonEq) {
            if self.accept_ident("TEXTUAL-CONVENTION") {
                return self.parse_textual_convention(name);
            }
            // Type or SEQUENCE alias: not part of the symbol table.
            self.skip_definition();
            return Ok(());
        }
        if self.is_ident("OBJECT-TYPE") {
            self.next();
            return self.parse_object_type(name);
        }
        if self.is_ident("MODULE-IDENTITY") {
            self.next();
            return self.parse_module_identity(name);
        }
        if self.is_ident("OBJECT-IDENTITY") {
            self.next();
            return self.parse_object_identity(name);
        }
        if self.is_ident("TEXTUAL-CONVENTION") {
            self.next();
            return self.parse_textual_convention(name);
        }
        if self.is_ident("NOTIFICATION-TYPE") {
            self.next();
            return self.parse_notification_type(name);
        }
        for construct in GROUP_LIKE {
            if self.is_ident(construct) {
                self.next();
                return self.parse_group_like(name, construct);
            }
        }
        self.skip_definition();
        Ok(())
    }

    // === Constructs ===

    /// `name OBJECT IDENTIFIER ::= { parentRef }`
    fn parse_oid_alias(&mut self, name: String) -> Result<(), ParseError> {
        self.next(); // OBJECT
        if !self.accept_ident("IDENTIFIER") {
            return Err(self.error(format!("expected IDENTIFIER after OBJECT for {name}")));
        }
        if !self.accept(TokenKind::ColonColonEq) {
            return Err(self.error("expected '::=' after OBJECT IDENTIFIER"));
        }
        let oid_ref = self.parse_braced_oid_ref("OBJECT IDENTIFIER assignment")?;
        self.resolve(name, oid_ref, PendingTarget::Node);
        Ok(())
    }

    /// `name OBJECT-TYPE <clauses> ::= { parentRef }`
    ///
    /// Clauses are accepted in any order. DESCRIPTION must be followed by
    /// a string; the other values are free text up to the next clause
    /// keyword.
    fn parse_object_type(&mut self, name: String) -> Result<(), ParseError> {
        let mut obj = ObjectType::new(name.clone());
        loop {
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error(format!("unexpected EOF in OBJECT-TYPE for {name}")));
            }
            if self.accept_ident("SYNTAX") {
                obj.syntax = self.parse_value_text(TYPE_STOPS);
                continue;
            }
            if self.accept_ident("MAX-ACCESS") || self.accept_ident("ACCESS") {
                obj.access =
                    self.parse_value_text(&["SYNTAX", "STATUS", "DESCRIPTION", "INDEX", "::="]);
                continue;
            }
            if self.accept_ident("STATUS") {
                obj.status = self.parse_value_text(&[
                    "SYNTAX",
                    "ACCESS",
                    "MAX-ACCESS",
                    "DESCRIPTION",
                    "INDEX",
                    "::=",
                ]);
                continue;
            }
            if self.accept_ident("DESCRIPTION") {
                if self.tok.kind != TokenKind::QuotedString {
                    return Err(self.error("expected string after DESCRIPTION"));
                }
                obj.description = self.tok.text.clone();
                self.next();
                continue;
            }
            if self.accept_ident("INDEX") {
                obj.index = self.parse_index_list()?;
                continue;
            }
            if self.accept(TokenKind::ColonColonEq) {
                let oid_ref = self.parse_braced_oid_ref("OBJECT-TYPE assignment")?;
                self.module.objects.insert(name.clone(), obj);
                self.resolve(name, oid_ref, PendingTarget::Object);
                return Ok(());
            }
            if self.accept(TokenKind::Semicolon) {
                continue;
            }
            self.next();
        }
    }

    /// `{ [IMPLIED] ident , [IMPLIED] ident , ... }`. The IMPLIED marker
    /// is consumed and dropped; entries are stored as plain names.
    fn parse_index_list(&mut self) -> Result<Vec<String>, ParseError> {
        if !self.accept(TokenKind::LBrace) {
            return Err(self.error("expected '{' after INDEX"));
        }
        let mut index = Vec::new();
        loop {
            if self.tok.kind == TokenKind::Ident {
                if self.tok.is_ident("IMPLIED") {
                    self.next();
                    continue;
                }
                index.push(self.tok.text.clone());
                self.next();
                if self.accept(TokenKind::Comma) {
                    continue;
                }
                if self.accept(TokenKind::RBrace) {
                    break;
                }
                return Err(self.error("expected ',' or '}' in INDEX list"));
            }
            if self.accept(TokenKind::RBrace) {
                break;
            }
            return Err(self.error("expected identifier in INDEX list"));
        }
        Ok(index)
    }

    /// `name MODULE-IDENTITY <clauses> ::= { parentRef }`
    ///
    /// The node name is registered immediately so children declared before
    /// resolution completes can still reference it.
    fn parse_module_identity(&mut self, name: String) -> Result<(), ParseError> {
        let mut mi = ModuleIdentity::new(name.clone());
        self.module.nodes.entry(name.clone()).or_default();
        loop {
            if self.accept_ident("LAST-UPDATED") {
                self.take_string_clause(&mut mi.last_updated);
                continue;
            }
            if self.accept_ident("ORGANIZATION") {
                self.take_string_clause(&mut mi.organization);
                continue;
            }
            if self.accept_ident("CONTACT-INFO") {
                self.take_string_clause(&mut mi.contact_info);
                continue;
            }
            if self.accept_ident("DESCRIPTION") {
                self.take_string_clause(&mut mi.description);
                continue;
            }
            if self.accept(TokenKind::ColonColonEq) {
                let oid_ref = self.parse_braced_oid_ref("MODULE-IDENTITY assignment")?;
                self.module.module_identity = Some(mi);
                self.resolve(name, oid_ref, PendingTarget::ModuleIdentity);
                return Ok(());
            }
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error("unexpected EOF in MODULE-IDENTITY"));
            }
            self.next();
        }
    }

    /// `name OBJECT-IDENTITY <clauses> ::= { parentRef }`
    fn parse_object_identity(&mut self, name: String) -> Result<(), ParseError> {
        let mut oi = ObjectIdentity::new(name.clone());
        self.module.nodes.entry(name.clone()).or_default();
        loop {
            if self.accept_ident("STATUS") {
                oi.status = self.parse_value_text(&["DESCRIPTION", "::="]);
                continue;
            }
            if self.accept_ident("DESCRIPTION") {
                self.take_string_clause(&mut oi.description);
                continue;
            }
            if self.accept(TokenKind::ColonColonEq) {
                let oid_ref = self.parse_braced_oid_ref("OBJECT-IDENTITY assignment")?;
                self.module
                    .object_identities
                    .insert(name.clone(), oi);
                self.resolve(name, oid_ref, PendingTarget::ObjectIdentity);
                return Ok(());
            }
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error("unexpected EOF in OBJECT-IDENTITY"));
            }
            self.next();
        }
    }

    /// `name NOTIFICATION-TYPE <clauses> ::= { parentRef }`
    fn parse_notification_type(&mut self, name: String) -> Result<(), ParseError> {
        let mut nt = NotificationType::new(name.clone());
        loop {
            if self.accept_ident("OBJECTS") {
                nt.objects = self.parse_objects_list()?;
                continue;
            }
            if self.accept_ident("STATUS") {
                nt.status = self.parse_value_text(&["OBJECTS", "DESCRIPTION", "::="]);
                continue;
            }
            if self.accept_ident("DESCRIPTION") {
                self.take_string_clause(&mut nt.description);
                continue;
            }
            if self.accept(TokenKind::ColonColonEq) {
                let oid_ref = self.parse_braced_oid_ref("NOTIFICATION-TYPE assignment")?;
                self.module.notification_types.insert(name.clone(), nt);
                self.resolve(name, oid_ref, PendingTarget::Notification);
                return Ok(());
            }
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error("unexpected EOF in NOTIFICATION-TYPE"));
            }
            self.next();
        }
    }

    /// `{ ident , ident , ... }`. The list ends at the first token that
    /// is neither an identifier nor a comma; the closing brace must follow.
    fn parse_objects_list(&mut self) -> Result<Vec<String>, ParseError> {
        if !self.accept(TokenKind::LBrace) {
            return Err(self.error("expected '{' after OBJECTS"));
        }
        let mut objects = Vec::new();
        while self.tok.kind == TokenKind::Ident {
            objects.push(self.tok.text.clone());
            self.next();
            if !self.accept(TokenKind::Comma) {
                break;
            }
        }
        if !self.accept(TokenKind::RBrace) {
            return Err(self.error("expected '}' at end of OBJECTS list"));
        }
        Ok(objects)
    }

    /// `N TEXTUAL-CONVENTION ...` or `N ::= TEXTUAL-CONVENTION ...`; the
    /// definition ends once SYNTAX has been read.
    fn parse_textual_convention(&mut self, name: String) -> Result<(), ParseError> {
        let mut tc = TextualConvention::new(name.clone());
        loop {
            if self.accept_ident("DISPLAY-HINT") {
                self.take_string_clause(&mut tc.display_hint);
                continue;
            }
            if self.accept_ident("STATUS") {
                tc.status = self.parse_value_text(&["DISPLAY-HINT", "DESCRIPTION", "SYNTAX"]);
                continue;
            }
            if self.accept_ident("DESCRIPTION") {
                self.take_string_clause(&mut tc.description);
                continue;
            }
            if self.accept_ident("SYNTAX") {
                tc.syntax = self.parse_type_text(TYPE_STOPS);
                self.module.textual_conventions.insert(name, tc);
                return Ok(());
            }
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error("unexpected EOF in TEXTUAL-CONVENTION"));
            }
            self.next();
        }
    }

    /// OBJECT-GROUP / NOTIFICATION-GROUP / MODULE-COMPLIANCE /
    /// AGENT-CAPABILITIES: the body up to the assignment is discarded and
    /// the resolved OID lands in `nodes` only.
    fn parse_group_like(&mut self, name: String, construct: &str) -> Result<(), ParseError> {
        loop {
            if self.tok.kind == TokenKind::Eof {
                return Err(self.error(format!("unexpected EOF in {construct}")));
            }
            if self.accept(TokenKind::ColonColonEq) {
                let oid_ref = self.parse_braced_oid_ref(&format!("{construct} assignment"))?;
                self.resolve(name, oid_ref, PendingTarget::Node);
                return Ok(());
            }
            self.next();
        }
    }

    // === Skipping ===

    /// Skip `MACRO ::= BEGIN ... END`, consuming the macro's END so it is
    /// not mistaken for the module terminator.
    fn skip_macro_body(&mut self) {
        self.next(); // MACRO
        if self.accept(TokenKind::ColonColonEq) && self.accept_ident("BEGIN") {
            while self.tok.kind != TokenKind::Eof {
                if self.accept_ident("END") {
                    return;
                }
                self.next();
            }
            return;
        }
        self.skip_definition();
    }

    /// Balanced-brace resync for unrecognized constructs: consume until
    /// the first `{`, then track depth and stop when it returns to zero.
    /// Without a brace, stop after a semicolon; a bare END is left for the
    /// body loop to arbitrate.
    fn skip_definition(&mut self) {
        let mut depth = 0usize;
        let mut entered = false;
        while self.tok.kind != TokenKind::Eof {
            if self.is_ident("END") {
                return;
            }
            match self.tok.kind {
                TokenKind::LBrace => {
                    depth += 1;
                    entered = true;
                }
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    if entered && depth == 0 {
                        self.next();
                        return;
                    }
                }
                TokenKind::Semicolon if !entered => {
                    self.next();
                    return;
                }
                _ => {}
            }
            self.next();
        }
    }

    // === Clause values ===

    /// Take the current token's text when it is a quoted string; a clause
    /// keyword not followed by a string leaves the slot unchanged.
    fn take_string_clause(&mut self, slot: &mut String) {
        if self.tok.kind == TokenKind::QuotedString {
            *slot = self.tok.text.clone();
            self.next();
        }
    }

    /// Concatenate tokens into a space-separated string, stopping when the
    /// current token is an identifier matching one of `stops`
    /// (case-insensitive), or `::=` when `"::="` is in the stop set.
    /// Strings are re-wrapped in double quotes; punctuation contributes
    /// its literal text.
    fn parse_value_text(&mut self, stops: &[&str]) -> String {
        let mut acc = String::new();
        while self.tok.kind != TokenKind::Eof {
            if self.at_value_stop(stops) {
                break;
            }
            self.push_value_token(&mut acc);
        }
        acc.trim().to_string()
    }

    /// Like [`Parser::parse_value_text`], but for type expressions that
    /// have no closing delimiter of their own: additionally ends at the
    /// next top-level boundary: a bare END, or an identifier whose
    /// following token introduces a new declaration.
    fn parse_type_text(&mut self, stops: &[&str]) -> String {
        let mut acc = String::new();
        while self.tok.kind != TokenKind::Eof {
            if self.at_value_stop(stops) {
                break;
            }
            if self.tok.kind == TokenKind::Ident {
                if self.tok.is_ident("END") {
                    break;
                }
                let peek = self.lexer.peek();
                if peek.kind == TokenKind::ColonColonEq
                    || (peek.kind == TokenKind::Ident
                        && CONSTRUCT_KEYWORDS
                            .iter()
                            .any(|kw| peek.text.eq_ignore_ascii_case(kw)))
                {
                    break;
                }
            }
            self.push_value_token(&mut acc);
        }
        acc.trim().to_string()
    }

    fn at_value_stop(&self, stops: &[&str]) -> bool {
        match self.tok.kind {
            TokenKind::Ident => stops
                .iter()
                .any(|s| self.tok.text.eq_ignore_ascii_case(s)),
            TokenKind::ColonColonEq => stops.contains(&"::="),
            _ => false,
        }
    }

    fn push_value_token(&mut self, acc: &mut String) {
        if !acc.is_empty() {
            acc.push(' ');
        }
        match self.tok.kind {
            TokenKind::QuotedString => {
                acc.push('"');
                acc.push_str(&self.tok.text);
                acc.push('"');
            }
            TokenKind::Number => acc.push_str(&self.tok.value.to_string()),
            _ => acc.push_str(&self.tok.text),
        }
        self.next();
    }

    // === OID references and resolution ===

    /// `{ parentRef }` with construct-specific error context.
    fn parse_braced_oid_ref(&mut self, context: &str) -> Result<OidRef, ParseError> {
        if !self.accept(TokenKind::LBrace) {
            return Err(self.error(format!("expected '{{' in {context}")));
        }
        let oid_ref = self.parse_oid_ref();
        if !self.accept(TokenKind::RBrace) {
            return Err(self.error(format!("expected '}}' in {context}")));
        }
        Ok(oid_ref)
    }

    /// Either a run of numbers (absolute OID) or a symbolic parent/index
    /// pair.
    fn parse_oid_ref(&mut self) -> OidRef {
        if self.tok.kind == TokenKind::Number {
            let mut arcs = Vec::new();
            while self.tok.kind == TokenKind::Number {
                arcs.push(self.tok.value);
                self.next();
            }
            return OidRef::Absolute(arcs);
        }
        let (name, index) = self.parse_parent_ref();
        OidRef::Parent { name, index }
    }

    /// `parent [ . parent ] [ index | ( index ) ]`. A module qualifier
    /// before the dot is dropped and the last identifier wins; a missing
    /// index defaults to 0.
    fn parse_parent_ref(&mut self) -> (String, u32) {
        let mut parent = String::new();
        let mut index = 0;
        if self.tok.kind == TokenKind::Ident {
            parent = self.tok.text.clone();
            self.next();
            if self.tok.kind == TokenKind::Dot {
                self.next();
                if self.tok.kind == TokenKind::Ident {
                    parent = self.tok.text.clone();
                    self.next();
                }
            }
        }
        if self.accept(TokenKind::LParen) {
            if self.tok.kind == TokenKind::Number {
                index = self.tok.value;
                self.next();
            }
            let _ = self.accept(TokenKind::RParen);
        } else if self.tok.kind == TokenKind::Number {
            index = self.tok.value;
            self.next();
        }
        (parent, index)
    }

    /// Resolve a freshly parsed declaration's OID immediately when the
    /// parent is known, otherwise queue it for the fixed-point pass.
    fn resolve(&mut self, name: String, oid_ref: OidRef, target: PendingTarget) {
        match oid_ref {
            OidRef::Absolute(arcs) => {
                Self::apply(&mut self.module, &name, target, Oid::from_arcs(arcs));
            }
            OidRef::Parent {
                name: parent,
                index,
            } => match self.resolved_base(&parent) {
                Some(base) => {
                    Self::apply(&mut self.module, &name, target, base.child(index));
                }
                None => {
                    if !matches!(target, PendingTarget::Notification) {
                        // Presence is recorded even before resolution.
                        self.module.nodes.entry(name.clone()).or_default();
                    }
                    self.pending.push(PendingRef {
                        name,
                        parent,
                        index,
                        target,
                    });
                }
            },
        }
    }

    /// A parent is usable once it has a non-empty node entry; empty
    /// placeholders do not resolve children.
    fn resolved_base(&self, parent: &str) -> Option<Oid> {
        self.module
            .nodes
            .get(parent)
            .filter(|oid| !oid.is_empty())
            .cloned()
    }

    /// Write a resolved OID through to the record(s) for `name`.
    fn apply(module: &mut Module, name: &str, target: PendingTarget, oid: Oid) {
        match target {
            PendingTarget::Node => {
                module.nodes.insert(name.to_string(), oid);
            }
            PendingTarget::Object => {
                if let Some(obj) = module.objects.get_mut(name) {
                    obj.oid = oid.clone();
                }
                module.nodes.insert(name.to_string(), oid);
            }
            PendingTarget::ObjectIdentity => {
                if let Some(oi) = module.object_identities.get_mut(name) {
                    oi.oid = oid.clone();
                }
                module.nodes.insert(name.to_string(), oid);
            }
            PendingTarget::ModuleIdentity => {
                if let Some(mi) = module.module_identity.as_mut() {
                    if mi.name == name {
                        mi.oid = oid.clone();
                    }
                }
                module.nodes.insert(name.to_string(), oid);
            }
            PendingTarget::Notification => {
                if let Some(nt) = module.notification_types.get_mut(name) {
                    nt.oid = oid;
                }
            }
        }
    }

    /// Fixed-point drain: each pass fires every pending reference whose
    /// parent now has a non-empty node entry; a pass with no progress ends
    /// the loop. Survivors (imported or genuinely unknown parents) are
    /// dropped without error.
    fn drain_pending(&mut self) {
        while !self.pending.is_empty() {
            let mut progressed = false;
            let mut remaining = Vec::with_capacity(self.pending.len());
            for pr in std::mem::take(&mut self.pending) {
                match self.resolved_base(&pr.parent) {
                    Some(base) => {
                        Self::apply(&mut self.module, &pr.name, pr.target, base.child(pr.index));
                        progressed = true;
                    }
                    None => remaining.push(pr),
                }
            }
            self.pending = remaining;
            if !progressed {
                break;
            }
        }
    }
}
