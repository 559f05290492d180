mod de;
mod ser;
