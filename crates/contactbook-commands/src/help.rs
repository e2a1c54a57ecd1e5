/// Reply to the `help` command
pub const HELP_TEXT: &str = "\
Supported commands:
hello - Greet the bot
add <name> <phone> - Add a new contact
change <name> <old_phone> <new_phone> - Change a contact's phone
phone <name> - Show phone numbers for a contact
all - Show all contacts
add-birthday <name> <date> - Add birthday
show-birthday <name> - Show birthday
birthdays - Show birthdays in the coming week
help - Show this help message
remove-phone <name> <phone> - Remove a phone number from a contact
delete <name> - Delete a contact
exit - Exit the bot";
