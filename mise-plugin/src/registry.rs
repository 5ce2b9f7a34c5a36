//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use mise_core::{MiseError, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::trace;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                trace!(function = name, args = args.len(), "calling plugin");
                f.call(args, ctx)
            }
            None => {
                let similar = self.find_similar_functions(name);
                let mut err = MiseError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use help() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Function names resembling `name`, best first
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                (score > 0).then(|| (func_name.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared words in snake_case names count for more than shared letters
        let query_words: HashSet<&str> = query.split('_').filter(|w| !w.is_empty()).collect();
        let shared_words = candidate.split('_').filter(|w| query_words.contains(w)).count();
        score += shared_words * 20;

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(function_to_help(f.meta())),
            None => Value::Error(
                MiseError::undefined_func(name)
                    .with_note("help() lists every registered function"),
            ),
        }
    }

    fn general_help(&self) -> Value {
        let mut by_category: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (name, f) in &self.functions {
            by_category.entry(f.meta().category).or_default().push(name.clone());
        }

        let functions = by_category.into_iter()
            .map(|(cat, mut names)| {
                names.sort();
                (cat.to_string(), Value::List(names.into_iter().map(Value::Text).collect()))
            })
            .collect();

        let mut help = HashMap::new();
        help.insert("functions".to_string(), Value::Object(functions));
        help.insert("usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()));
        Value::Object(help)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .collect();
        metas.sort_by_key(|meta| meta.name);

        let funcs = metas.into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }
}

fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
    let mut help = HashMap::new();
    help.insert("name".to_string(), Value::Text(meta.name.to_string()));
    help.insert("description".to_string(), Value::Text(meta.description.to_string()));
    help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
    help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
    help.insert("category".to_string(), Value::Text(meta.category.to_string()));
    help.insert("args".to_string(), Value::List(
        meta.args.iter().map(|a| {
            let mut arg = HashMap::new();
            arg.insert("name".to_string(), Value::Text(a.name.to_string()));
            arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
            arg.insert("description".to_string(), Value::Text(a.description.to_string()));
            arg.insert("optional".to_string(), Value::Bool(a.optional));
            if let Some(default) = a.default {
                arg.insert("default".to_string(), Value::Text(default.to_string()));
            }
            Value::Object(arg)
        }).collect()
    ));
    help.insert("examples".to_string(), Value::List(
        meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
    ));
    help.insert("related".to_string(), Value::List(
        meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
    ));
    help
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
