//! 命令注册表
//!
//! 参考 LibreCAD 的 RS_Commands 实现
//! 支持完整命令、快捷键、用户别名和前缀补全

use crate::action::ActionType;
use std::collections::HashMap;

/// 命令注册表
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    /// 完整命令 -> ActionType
    commands: HashMap<String, ActionType>,
    /// 快捷键 -> ActionType
    shortcuts: HashMap<String, ActionType>,
    /// 用户别名 -> 完整命令
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
            shortcuts: HashMap::new(),
            aliases: HashMap::new(),
        };

        for action in ActionType::ALL {
            registry.register(action, action.command(), action.shortcuts());
        }

        registry
    }

    /// 注册命令及其快捷键（不区分大小写）
    pub fn register(&mut self, action: ActionType, full_cmd: &str, shortcuts: &[&str]) {
        self.commands.insert(full_cmd.to_uppercase(), action);
        for shortcut in shortcuts {
            self.shortcuts.insert(shortcut.to_uppercase(), action);
        }
    }

    /// 查找命令对应的 ActionType：完整命令 > 快捷键 > 别名
    pub fn lookup(&self, input: &str) -> Option<ActionType> {
        let key = input.trim().to_uppercase();

        self.commands
            .get(&key)
            .or_else(|| self.shortcuts.get(&key))
            .or_else(|| self.aliases.get(&key).and_then(|cmd| self.commands.get(cmd)))
            .copied()
    }

    /// 以 prefix 开头的完整命令（已排序）
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_uppercase();
        let mut results: Vec<String> = self
            .commands
            .keys()
            .filter(|cmd| cmd.starts_with(&prefix))
            .cloned()
            .collect();

        results.sort();
        results
    }

    /// 获取 action 的完整命令名
    pub fn command_name(&self, action: ActionType) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(cmd, _)| cmd.as_str())
    }

    /// 添加用户别名，不允许覆盖现有命令，目标命令必须存在
    pub fn add_alias(&mut self, alias: &str, command: &str) -> bool {
        let alias = alias.to_uppercase();
        let command = command.to_uppercase();

        if self.commands.contains_key(&alias) || !self.commands.contains_key(&command) {
            return false;
        }

        self.aliases.insert(alias, command);
        true
    }

    pub fn remove_alias(&mut self, alias: &str) {
        self.aliases.remove(&alias.to_uppercase());
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
