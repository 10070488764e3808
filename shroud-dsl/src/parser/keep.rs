//! Keep rules: class specification and member block

use super::parser::ConfigurationParser;
use crate::error::ParseResult;
use crate::lexer::*;
use shroud_core::class_util::{
    external_short_class_name, internal_class_name, internal_method_descriptor, internal_type,
    METHOD_NAME_INIT, TYPE_VOID,
};
use shroud_core::{AccessFlagSet, AccessFlags, KeepIntent, KeepSpec, MemberSpec};

impl ConfigurationParser {
    /// `[!]modifier... class|interface name [extends|implements name] [as name]
    /// [{ member... }]`
    pub(crate) fn parse_keep(&mut self, intent: KeepIntent) -> ParseResult<KeepSpec> {
        let comments = self.last_comments.take();

        let mut access = AccessFlagSet::new();
        loop {
            let word = self.read_word("keyword 'class' or 'interface'")?;
            if word == CLASS_KEYWORD {
                break;
            }

            let (keyword, present) = strip_negator(&word);
            let flag = AccessFlags::from_class_keyword(keyword)
                .ok_or_else(|| self.error("Unexpected keyword"))?;
            access.require(flag, present).map_err(|err| self.invalid(err))?;

            if keyword == INTERFACE_KEYWORD {
                break;
            }
        }

        let external_class_name = self.read_word("class name or interface name")?;
        self.check_java_identifier(&external_class_name, "class name or interface name")?;
        let class_name = (external_class_name != ANY_CLASS_KEYWORD)
            .then(|| internal_class_name(&external_class_name));

        let mut spec = KeepSpec::new(class_name, intent)
            .with_access(access)
            .with_comments(comments);

        self.cursor.advance()?;
        if !self.cursor.at_directive_end()
            && (self.cursor.is(IMPLEMENTS_KEYWORD) || self.cursor.is(EXTENDS_KEYWORD))
        {
            let name = self.read_word("class name or interface name")?;
            self.check_java_identifier(&name, "class name or interface name")?;
            spec = spec.with_extends(internal_class_name(&name));
            self.cursor.advance()?;
        }

        if !self.cursor.at_directive_end() && self.cursor.is(AS_KEYWORD) {
            let name = self.read_word("new class name")?;
            self.check_java_identifier(&name, "new class name")?;
            spec = spec.with_as(internal_class_name(&name));
            self.cursor.advance()?;
        }

        if self.cursor.at_directive_end() {
            return Ok(spec);
        }
        if !self.cursor.is(OPEN_KEYWORD) {
            return Err(self.error(format!("Expecting opening '{OPEN_KEYWORD}' at")));
        }

        loop {
            let mut access = AccessFlagSet::new();
            let word = loop {
                let word = self.read_word("class member description or closing '}'")?;
                if access.is_empty() && word == CLOSE_KEYWORD {
                    self.cursor.advance()?;
                    return Ok(spec);
                }

                let (keyword, present) = strip_negator(&word);
                let Some(flag) = AccessFlags::from_member_keyword(keyword) else {
                    break word;
                };
                access.require(flag, present).map_err(|err| self.invalid(err))?;
            };

            self.parse_member(&mut spec, &external_class_name, access, word)?;
        }
    }

    /// One member up to and including its `;`. `word` is the first word after
    /// the modifiers.
    fn parse_member(
        &mut self,
        spec: &mut KeepSpec,
        external_class_name: &str,
        access: AccessFlagSet,
        word: String,
    ) -> ParseResult<()> {
        if word == ANY_CLASS_MEMBER_KEYWORD
            || word == ANY_FIELD_KEYWORD
            || word == ANY_METHOD_KEYWORD
        {
            if word != ANY_METHOD_KEYWORD {
                access.check_field().map_err(|err| self.invalid(err))?;
            }
            if word != ANY_FIELD_KEYWORD {
                access.check_method().map_err(|err| self.invalid(err))?;
            }
            if word != ANY_METHOD_KEYWORD {
                spec.add_field(MemberSpec::any(access));
            }
            if word != ANY_FIELD_KEYWORD {
                spec.add_method(MemberSpec::any(access));
            }

            return self.expect_separator();
        }

        self.check_java_identifier(&word, "class member type")?;
        let mut member_type = word;
        let mut name = self.read_word("class member name")?;

        if name == OPEN_ARGUMENTS_KEYWORD {
            let is_constructor = member_type == METHOD_NAME_INIT
                || member_type == external_class_name
                || member_type == external_short_class_name(external_class_name);
            if !is_constructor {
                return Err(self.error(format!(
                    "Expecting type and name instead of just '{member_type}' before"
                )));
            }
            member_type = TYPE_VOID.to_string();
            name = METHOD_NAME_INIT.to_string();
        } else {
            self.check_java_identifier(&name, "class member name")?;
            self.read_word("opening '(' or separator ';'")?;
        }

        if self.cursor.is(SEPARATOR_KEYWORD) {
            access.check_field().map_err(|err| self.invalid(err))?;
            spec.add_field(MemberSpec::named(access, name, internal_type(&member_type)));
            Ok(())
        } else if self.cursor.is(OPEN_ARGUMENTS_KEYWORD) {
            access.check_method().map_err(|err| self.invalid(err))?;
            let arguments = self.parse_comma_separated_list(true, false, true)?;
            let descriptor = internal_method_descriptor(&member_type, &arguments);
            self.expect_separator()?;
            spec.add_method(MemberSpec::named(access, name, descriptor));
            Ok(())
        } else {
            Err(self.error("Expecting opening '(' or separator ';' before"))
        }
    }

    fn expect_separator(&mut self) -> ParseResult<()> {
        let separator = self.read_word("separator ';'")?;
        if separator != SEPARATOR_KEYWORD {
            return Err(self.error(format!("Expecting separator '{SEPARATOR_KEYWORD}' before")));
        }
        Ok(())
    }
}
